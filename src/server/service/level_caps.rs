use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::level_caps::LevelCapsRepository,
    error::AppError,
    model::level_caps::{GlobalLevelCapConfig, LevelCapChange, UpdateGlobalConfigParam},
};

/// Version reported before any configuration exists.
const EMPTY_VERSION: &str = "0";

/// Number of history entries returned to the admin panel.
const HISTORY_LIMIT: u64 = 50;

pub struct LevelCapsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelCapsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the configuration version and the time it was last updated.
    ///
    /// Reading the version never creates the singleton; without one the version is
    /// `"0"` and the timestamp is the current time.
    pub async fn version(&self) -> Result<(String, DateTime<Utc>), AppError> {
        match LevelCapsRepository::new(self.db).get().await? {
            Some(level_caps) => Ok((level_caps.version()?, level_caps.updated_at)),
            None => Ok((EMPTY_VERSION.to_string(), Utc::now())),
        }
    }

    pub async fn get_config(&self) -> Result<GlobalLevelCapConfig, AppError> {
        let level_caps = LevelCapsRepository::new(self.db)
            .get_or_create_default()
            .await?;

        Ok(level_caps.global_config)
    }

    pub async fn update_config(
        &self,
        param: UpdateGlobalConfigParam,
    ) -> Result<GlobalLevelCapConfig, AppError> {
        let admin = param.admin.clone();
        let level_caps = LevelCapsRepository::new(self.db)
            .update_global_config(param)
            .await?;

        tracing::info!("Level caps configuration updated by {}", admin);

        Ok(level_caps.global_config)
    }

    pub async fn history(&self) -> Result<Vec<LevelCapChange>, AppError> {
        LevelCapsRepository::new(self.db)
            .get_history(HISTORY_LIMIT)
            .await
    }
}
