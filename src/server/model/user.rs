//! User domain models and parameters.
//!
//! A user correlates a Minecraft account (by UUID) with an optional Discord identity
//! and tracks verification, ban, starter and balance state for both.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::{player::PlayerDto, user::UserDto};

/// User with Minecraft and Discord identity, moderation and starter state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub minecraft_uuid: Option<String>,
    pub minecraft_username: Option<String>,
    /// Discord snowflake as stored. Seeded fake users carry non-numeric IDs.
    pub discord_id: Option<String>,
    pub discord_username: String,
    pub nickname: String,
    pub verified: bool,
    /// Pending verification code, cleared once it has been redeemed.
    pub verification_code: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub banned_at: Option<DateTime<Utc>>,
    pub starter_id: Option<i32>,
    pub starter_is_shiny: bool,
    pub starter_given: bool,
    pub rolled_at: Option<DateTime<Utc>>,
    pub is_admin: bool,
    pub is_fake: bool,
    pub cobble_dollars_balance: i64,
    pub minecraft_online: bool,
    pub minecraft_last_seen: Option<DateTime<Utc>>,
    pub synced_at: Option<DateTime<Utc>>,
    /// Game data from the last sync, `[]` until the first one.
    pub pokemon_party: Value,
    pub pc_storage: Value,
    pub inventory: Value,
    pub ender_chest: Value,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The verification code is intentionally dropped here.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            minecraft_uuid: self.minecraft_uuid,
            minecraft_username: self.minecraft_username,
            discord_id: self.discord_id,
            discord_username: self.discord_username,
            nickname: self.nickname,
            verified: self.verified,
            banned: self.banned,
            starter_id: self.starter_id,
            starter_is_shiny: self.starter_is_shiny,
            starter_given: self.starter_given,
            rolled_at: self.rolled_at,
            is_admin: self.is_admin,
            cobble_dollars_balance: self.cobble_dollars_balance,
        }
    }

    /// Player list entry. Callers only pass users linked to a Minecraft account.
    pub fn into_player_dto(self) -> PlayerDto {
        PlayerDto {
            minecraft_uuid: self.minecraft_uuid.unwrap_or_default(),
            minecraft_username: self.minecraft_username,
            nickname: self.nickname,
            discord_username: self.discord_username,
            minecraft_online: self.minecraft_online,
            minecraft_last_seen: self.minecraft_last_seen,
            synced_at: self.synced_at,
            verified: self.verified,
            banned: self.banned,
            starter_id: self.starter_id,
            starter_is_shiny: self.starter_is_shiny,
            cobble_dollars_balance: self.cobble_dollars_balance,
            pokemon_party: self.pokemon_party,
            pc_storage: self.pc_storage,
            inventory: self.inventory,
            ender_chest: self.ender_chest,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            minecraft_uuid: entity.minecraft_uuid,
            minecraft_username: entity.minecraft_username,
            discord_id: entity.discord_id,
            discord_username: entity.discord_username,
            nickname: entity.nickname,
            verified: entity.verified,
            verification_code: entity.verification_code,
            verified_at: entity.verified_at,
            banned: entity.banned,
            ban_reason: entity.ban_reason,
            banned_at: entity.banned_at,
            starter_id: entity.starter_id,
            starter_is_shiny: entity.starter_is_shiny,
            starter_given: entity.starter_given,
            rolled_at: entity.rolled_at,
            is_admin: entity.is_admin,
            is_fake: entity.is_fake,
            cobble_dollars_balance: entity.cobble_dollars_balance,
            minecraft_online: entity.minecraft_online,
            minecraft_last_seen: entity.minecraft_last_seen,
            synced_at: entity.synced_at,
            pokemon_party: entity.pokemon_party.unwrap_or_else(empty_list),
            pc_storage: entity.pc_storage.unwrap_or_else(empty_list),
            inventory: entity.inventory.unwrap_or_else(empty_list),
            ender_chest: entity.ender_chest.unwrap_or_else(empty_list),
        }
    }

    /// Display name for the user, preferring the Minecraft username.
    pub fn display_name(&self) -> &str {
        self.minecraft_username
            .as_deref()
            .unwrap_or(&self.discord_username)
    }
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

/// Parameters for upserting a user after a Discord login.
///
/// `is_admin` of `None` preserves the stored admin flag, `Some` overwrites it.
#[derive(Debug, Clone)]
pub struct UpsertDiscordUserParam {
    pub discord_id: u64,
    pub discord_username: String,
    pub nickname: String,
    pub is_admin: Option<bool>,
}

/// Parameters for issuing a verification code to a Minecraft account.
#[derive(Debug, Clone)]
pub struct IssueVerificationCodeParam {
    pub minecraft_uuid: String,
    pub minecraft_username: String,
    pub code: String,
}

/// Parameters for banning or unbanning a Minecraft account.
#[derive(Debug, Clone)]
pub struct SetBanParam {
    pub minecraft_uuid: String,
    pub banned: bool,
    pub reason: Option<String>,
}

/// Parameters for one synthetic user inserted by the seeding endpoint.
#[derive(Debug, Clone)]
pub struct CreateFakeUserParam {
    pub discord_id: String,
    pub discord_username: String,
    pub nickname: String,
    pub starter_id: i32,
    pub starter_is_shiny: bool,
}

/// Player state pushed by the Minecraft server.
///
/// The game data lists are stored as reported and never interpreted here.
#[derive(Debug, Clone)]
pub struct SyncPlayerParam {
    pub minecraft_uuid: String,
    pub minecraft_username: String,
    pub online: bool,
    pub last_seen: DateTime<Utc>,
    pub cobble_dollars_balance: i64,
    pub pokemon_party: Value,
    pub pc_storage: Value,
    pub inventory: Value,
    pub ender_chest: Value,
}
