//! Level caps repository.
//!
//! Manages the singleton configuration row (always `id = 1`) and its append-only
//! change history.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, QueryOrder, QuerySelect,
    TransactionSession, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::level_caps::{GlobalLevelCapConfig, LevelCapChange, LevelCaps, UpdateGlobalConfigParam},
};

/// Primary key of the singleton row.
const LEVEL_CAPS_ID: i32 = 1;

const UPDATE_GLOBAL_CONFIG_ACTION: &str = "update_global_config";
const UPDATE_GLOBAL_CONFIG_REASON: &str = "Manual config update";

pub struct LevelCapsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LevelCapsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the singleton, if it has been created.
    ///
    /// # Returns
    /// - `Ok(Some(LevelCaps))` - Stored configuration
    /// - `Ok(None)` - No configuration stored yet
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored JSON does not match the expected shape
    pub async fn get(&self) -> Result<Option<LevelCaps>, AppError> {
        let entity = entity::prelude::LevelCaps::find_by_id(LEVEL_CAPS_ID)
            .one(self.db)
            .await?;

        entity.map(LevelCaps::from_entity).transpose()
    }

    /// Gets the singleton, creating it with the default configuration on first access.
    ///
    /// Concurrent first accesses race on the insert; the loser's insert is a no-op and
    /// both read back the same row.
    pub async fn get_or_create_default(&self) -> Result<LevelCaps, AppError> {
        if let Some(level_caps) = self.get().await? {
            return Ok(level_caps);
        }

        let now = Utc::now();
        let inserted = entity::prelude::LevelCaps::insert(entity::level_caps::ActiveModel {
            id: ActiveValue::Set(LEVEL_CAPS_ID),
            global_config: ActiveValue::Set(GlobalLevelCapConfig::default().to_json()?),
            static_rules: ActiveValue::Set(serde_json::json!([])),
            time_based_rules: ActiveValue::Set(serde_json::json!([])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::level_caps::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        if inserted > 0 {
            tracing::info!("Created default level caps configuration");
        }

        self.get().await?.ok_or_else(|| {
            AppError::InternalError("Level caps row missing after insert".to_string())
        })
    }

    /// Deletes the singleton and its history, returning how many rows were removed.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let changes = entity::prelude::LevelCapChange::delete_many()
            .exec(self.db)
            .await?;
        let level_caps = entity::prelude::LevelCaps::delete_many()
            .exec(self.db)
            .await?;

        Ok(changes.rows_affected + level_caps.rows_affected)
    }

    /// Gets the most recent changes, newest first.
    pub async fn get_history(&self, limit: u64) -> Result<Vec<LevelCapChange>, AppError> {
        let entities = entity::prelude::LevelCapChange::find()
            .order_by_desc(entity::level_cap_change::Column::Timestamp)
            .order_by_desc(entity::level_cap_change::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LevelCapChange::from_entity).collect())
    }
}

impl<C: ConnectionTrait + TransactionTrait> LevelCapsRepository<'_, C> {
    /// Replaces the global configuration and appends the change to the history.
    ///
    /// The snapshot, the update and the history row share one transaction so the
    /// history never disagrees with the stored configuration.
    pub async fn update_global_config(
        &self,
        param: UpdateGlobalConfigParam,
    ) -> Result<LevelCaps, AppError> {
        let after_json = param.config.to_json()?;
        let now = Utc::now();

        let txn = self.db.begin().await?;

        let before = LevelCapsRepository::new(&txn).get_or_create_default().await?;
        let before_json = before.global_config.to_json()?;

        let entity = entity::level_caps::ActiveModel {
            id: ActiveValue::Unchanged(LEVEL_CAPS_ID),
            global_config: ActiveValue::Set(after_json.clone()),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        entity::level_cap_change::ActiveModel {
            timestamp: ActiveValue::Set(now),
            admin: ActiveValue::Set(param.admin),
            action: ActiveValue::Set(UPDATE_GLOBAL_CONFIG_ACTION.to_string()),
            before: ActiveValue::Set(before_json),
            after: ActiveValue::Set(after_json),
            reason: ActiveValue::Set(UPDATE_GLOBAL_CONFIG_REASON.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        LevelCaps::from_entity(entity)
    }
}
