use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BanStatusDto {
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub banned_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatusDto {
    pub verified: bool,
    pub exists: bool,
    pub discord_linked: bool,
    pub banned: bool,
}

/// Starter delivery state polled by the Minecraft plugin.
///
/// `pokemonId` and `isShiny` are only present while a delivery is pending.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StarterStatusDto {
    pub pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pokemon_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shiny: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct StarterGivenDto {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: Option<String>,
    /// Defaults to `true` when omitted.
    #[serde(default, deserialize_with = "lenient::bool")]
    pub given: Option<bool>,
}

/// Player state pushed by the Minecraft server.
///
/// Missing lists are stored as `[]`; a missing balance as 0.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncPlayerDto {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::bool")]
    pub online: Option<bool>,
    /// RFC 3339 timestamp, defaults to the time of the sync.
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_seen: Option<String>,
    #[serde(default, deserialize_with = "lenient::i64")]
    pub cobble_dollars_balance: Option<i64>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub party: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub pc_storage: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub inventory: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub ender_chest: serde_json::Value,
}

/// `banned` lets the server kick a banned player as soon as they sync.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SyncResultDto {
    pub success: bool,
    pub banned: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub minecraft_uuid: String,
    pub minecraft_username: Option<String>,
    pub nickname: String,
    pub discord_username: String,
    pub minecraft_online: bool,
    pub minecraft_last_seen: Option<DateTime<Utc>>,
    pub synced_at: Option<DateTime<Utc>>,
    pub verified: bool,
    pub banned: bool,
    pub starter_id: Option<i32>,
    pub starter_is_shiny: bool,
    pub cobble_dollars_balance: i64,
    #[schema(value_type = Object)]
    pub pokemon_party: serde_json::Value,
    #[schema(value_type = Object)]
    pub pc_storage: serde_json::Value,
    #[schema(value_type = Object)]
    pub inventory: serde_json::Value,
    #[schema(value_type = Object)]
    pub ender_chest: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PlayersDto {
    pub players: Vec<PlayerDto>,
}
