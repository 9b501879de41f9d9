//! Synthetic test users for non-production deployments.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateFakeUserParam, User},
};

/// Discord ID, username and nickname of every fake user.
const FAKE_USERS: [(&str, &str, &str); 8] = [
    ("fake_001", "AshKetchum", "Ash"),
    ("fake_002", "MistyWater", "Misty"),
    ("fake_003", "BrockRock", "Brock"),
    ("fake_004", "GaryOak", "Gary"),
    ("fake_005", "TeamRocketJesse", "Jessie"),
    ("fake_006", "TeamRocketJames", "James"),
    ("fake_007", "ProfOak", "Prof. Oak"),
    ("fake_008", "NurseJoy", "Joy"),
];

/// Starter Pokédex numbers handed to the fake users, in order.
const FAKE_STARTERS: [i32; 8] = [1, 4, 7, 152, 155, 158, 252, 255];

/// Index of the fake user whose starter is shiny.
const SHINY_INDEX: usize = 3;

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the fake users, or returns the existing ones if already seeded.
    pub async fn seed(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let existing = user_repo.get_fake_users().await?;
        if !existing.is_empty() {
            tracing::debug!("Fake users already present, skipping seed");
            return Ok(existing);
        }

        let params = FAKE_USERS
            .iter()
            .zip(FAKE_STARTERS)
            .enumerate()
            .map(
                |(index, ((discord_id, discord_username, nickname), starter_id))| {
                    CreateFakeUserParam {
                        discord_id: discord_id.to_string(),
                        discord_username: discord_username.to_string(),
                        nickname: nickname.to_string(),
                        starter_id,
                        starter_is_shiny: index == SHINY_INDEX,
                    }
                },
            )
            .collect();

        let users = user_repo.insert_fake_users(params).await?;

        tracing::info!("Seeded {} fake users", users.len());

        Ok(users)
    }

    /// Deletes every fake user.
    pub async fn clear(&self) -> Result<u64, AppError> {
        let deleted = UserRepository::new(self.db).delete_fake_users().await?;

        tracing::info!("Removed {} fake users", deleted);

        Ok(deleted)
    }
}
