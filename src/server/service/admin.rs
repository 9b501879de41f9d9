//! Admin moderation and maintenance operations.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{level_caps::LevelCapsRepository, shop_purchase::ShopPurchaseRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{SetBanParam, User},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bans or unbans a player by Minecraft UUID.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that UUID
    pub async fn set_ban(&self, admin: &User, param: SetBanParam) -> Result<User, AppError> {
        let minecraft_uuid = param.minecraft_uuid.clone();

        let Some(user) = UserRepository::new(self.db).set_banned(param).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        tracing::info!(
            "{} {} {}",
            admin.discord_username,
            if user.banned { "banned" } else { "unbanned" },
            minecraft_uuid
        );

        Ok(user)
    }

    /// Deletes every record in every collection.
    ///
    /// All deletes run in one transaction; a failure leaves the store untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of deleted records
    pub async fn reset_store(&self, admin: &User) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn).delete_all().await?;
        let purchases = ShopPurchaseRepository::new(&txn).delete_all().await?;
        let level_caps = LevelCapsRepository::new(&txn).delete_all().await?;

        txn.commit().await?;

        let deleted = users + purchases + level_caps;

        tracing::warn!(
            "Data store reset by {}: {} records deleted",
            admin.discord_username,
            deleted
        );

        Ok(deleted)
    }
}

/// Checks the reset confirmation token.
///
/// Reset is disabled entirely when no token is configured.
///
/// # Returns
/// - `Ok(())` - Provided token matches the configured one
/// - `Err(AuthError::InvalidResetToken)` - Missing, wrong, or reset disabled
pub fn check_reset_token(provided: Option<&str>, configured: Option<&str>) -> Result<(), AppError> {
    match (provided, configured) {
        (Some(provided), Some(configured)) if provided == configured => Ok(()),
        _ => Err(AuthError::InvalidResetToken.into()),
    }
}
