use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomMessagesDto {
    pub capture_failed: String,
    pub exp_blocked: String,
    pub item_blocked: String,
    pub trade_blocked: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementModeDto {
    Hard,
    Soft,
}

/// Server-wide level cap settings consumed by the Minecraft plugin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalLevelCapConfigDto {
    pub capture_cap_enabled: bool,
    pub ownership_cap_enabled: bool,
    pub default_capture_cap_formula: String,
    pub default_ownership_cap_formula: String,
    pub enforcement_mode: EnforcementModeDto,
    pub custom_messages: CustomMessagesDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LevelCapsConfigDto {
    pub success: bool,
    pub config: GlobalLevelCapConfigDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LevelCapsVersionDto {
    pub success: bool,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LevelCapChangeDto {
    pub timestamp: DateTime<Utc>,
    pub admin: String,
    pub action: String,
    #[schema(value_type = Object)]
    pub before: serde_json::Value,
    #[schema(value_type = Object)]
    pub after: serde_json::Value,
    pub reason: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LevelCapsHistoryDto {
    pub success: bool,
    pub history: Vec<LevelCapChangeDto>,
}
