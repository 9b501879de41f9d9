//! Minecraft account verification.
//!
//! A player moves from unlinked to code-issued when the plugin issues a code, and
//! from code-issued to verified when the code is redeemed. Redeeming clears the
//! code, so every issued code succeeds at most once.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{IssueVerificationCodeParam, User},
};

/// Result of a verification attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyOutcome {
    Verified(User),
    /// No pending code matches the UUID, including a code already redeemed.
    InvalidCode,
}

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn verify(&self, minecraft_uuid: &str, code: &str) -> Result<VerifyOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_uuid_and_code(minecraft_uuid, code).await? else {
            tracing::debug!("Rejected verification code for {}", minecraft_uuid);
            return Ok(VerifyOutcome::InvalidCode);
        };

        let user = user_repo.mark_verified(user.id, code.to_string()).await?;

        tracing::info!("Verified Minecraft account {}", minecraft_uuid);

        Ok(VerifyOutcome::Verified(user))
    }

    /// Issues a verification code, replacing any code still pending for the player.
    pub async fn issue_code(&self, param: IssueVerificationCodeParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .issue_verification_code(param)
            .await?;

        tracing::info!("Issued verification code for {}", user.display_name());

        Ok(user)
    }
}
