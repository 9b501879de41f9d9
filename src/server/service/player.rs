//! Player status lookups for the Minecraft plugin.
//!
//! Every operation is a single point lookup by Minecraft UUID. Unknown players are
//! not an error for the status projections.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        player::{Balance, BanStatus, StarterStatus, VerificationStatus},
        user::{SyncPlayerParam, User},
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ban_status(&self, uuid: &str) -> Result<BanStatus, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_minecraft_uuid(uuid)
            .await?;

        Ok(BanStatus::from_user(user.as_ref()))
    }

    pub async fn verification_status(&self, uuid: &str) -> Result<VerificationStatus, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_minecraft_uuid(uuid)
            .await?;

        Ok(VerificationStatus::from_user(user.as_ref()))
    }

    pub async fn starter_status(&self, uuid: &str) -> Result<StarterStatus, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_minecraft_uuid(uuid)
            .await?;

        Ok(StarterStatus::from_user(user.as_ref()))
    }

    /// Gets the CobbleDollars balance for a player.
    ///
    /// # Returns
    /// - `Ok(Balance)` - Balance and username ("Unknown" when never set)
    /// - `Err(AppError::NotFound)` - No user with that UUID
    pub async fn balance(&self, uuid: &str) -> Result<Balance, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_minecraft_uuid(uuid)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        Ok(Balance::from_user(uuid.to_string(), &user))
    }

    /// Records starter delivery reported by the plugin.
    ///
    /// # Returns
    /// - `Ok(())` - Delivery state updated
    /// - `Err(AppError::NotFound)` - No user with that UUID
    pub async fn set_starter_given(&self, uuid: &str, given: bool) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db)
            .set_starter_given(uuid, given)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        tracing::info!(
            "Starter for {} marked as {}",
            user.display_name(),
            if given { "given" } else { "pending" }
        );

        Ok(())
    }

    /// Stores a sync from the Minecraft server and returns the player as stored.
    pub async fn sync(&self, param: SyncPlayerParam) -> Result<User, AppError> {
        let player = UserRepository::new(self.db).sync_player(param).await?;

        tracing::debug!(
            "Synced {} (online: {}, balance: {})",
            player.display_name(),
            player.minecraft_online,
            player.cobble_dollars_balance
        );

        Ok(player)
    }

    pub async fn list_players(&self) -> Result<Vec<User>, AppError> {
        let players = UserRepository::new(self.db).get_players().await?;

        Ok(players)
    }
}
