//! Level caps factory for creating the singleton configuration row.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates the level caps singleton with a fixed global configuration and no rules.
///
/// # Returns
/// - `Ok(entity::level_caps::Model)` - Created singleton row (id = 1)
/// - `Err(DbErr)` - Database error during insert, including when the row already exists
pub async fn create_level_caps(
    db: &DatabaseConnection,
) -> Result<entity::level_caps::Model, DbErr> {
    let now = Utc::now();
    entity::level_caps::ActiveModel {
        id: ActiveValue::Set(1),
        global_config: ActiveValue::Set(json!({
            "captureCapEnabled": true,
            "ownershipCapEnabled": true,
            "defaultCaptureCapFormula": "50",
            "defaultOwnershipCapFormula": "100",
            "enforcementMode": "hard",
            "customMessages": {
                "captureFailed": "capture failed",
                "expBlocked": "exp blocked",
                "itemBlocked": "item blocked",
                "tradeBlocked": "trade blocked"
            }
        })),
        static_rules: ActiveValue::Set(json!([])),
        time_based_rules: ActiveValue::Set(json!([])),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
