use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user record.
///
/// Verification codes are never part of this shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub minecraft_uuid: Option<String>,
    pub minecraft_username: Option<String>,
    pub discord_id: Option<String>,
    pub discord_username: String,
    pub nickname: String,
    pub verified: bool,
    pub banned: bool,
    pub starter_id: Option<i32>,
    pub starter_is_shiny: bool,
    pub starter_given: bool,
    pub rolled_at: Option<DateTime<Utc>>,
    pub is_admin: bool,
    pub cobble_dollars_balance: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UsersDto {
    pub users: Vec<UserDto>,
}
