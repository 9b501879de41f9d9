//! Read-only player status projections polled by the Minecraft plugin.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        player::{BanStatusDto, StarterStatusDto, VerificationStatusDto},
        shop::BalanceDto,
    },
    server::model::user::User,
};

const UNKNOWN_USERNAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BanStatus {
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub banned_at: Option<DateTime<Utc>>,
}

impl BanStatus {
    /// Unknown players are reported as not banned.
    pub fn from_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                banned: user.banned,
                ban_reason: user.ban_reason.clone(),
                banned_at: user.banned_at,
            },
            None => Self::default(),
        }
    }

    pub fn into_dto(self) -> BanStatusDto {
        BanStatusDto {
            banned: self.banned,
            ban_reason: self.ban_reason,
            banned_at: self.banned_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerificationStatus {
    pub verified: bool,
    pub exists: bool,
    pub discord_linked: bool,
    pub banned: bool,
}

impl VerificationStatus {
    /// Unknown players are a clean slate: nothing exists, nothing is verified.
    pub fn from_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                verified: user.verified,
                exists: true,
                discord_linked: user.discord_id.is_some(),
                banned: user.banned,
            },
            None => Self::default(),
        }
    }

    pub fn into_dto(self) -> VerificationStatusDto {
        VerificationStatusDto {
            verified: self.verified,
            exists: self.exists,
            discord_linked: self.discord_linked,
            banned: self.banned,
        }
    }
}

/// Starter waiting to be delivered in game, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum StarterStatus {
    Pending { pokemon_id: i32, is_shiny: bool },
    None,
}

impl StarterStatus {
    /// A starter is pending once rolled and until the plugin reports delivery.
    pub fn from_user(user: Option<&User>) -> Self {
        match user {
            Some(User {
                starter_id: Some(pokemon_id),
                starter_given: false,
                starter_is_shiny,
                ..
            }) => Self::Pending {
                pokemon_id: *pokemon_id,
                is_shiny: *starter_is_shiny,
            },
            _ => Self::None,
        }
    }

    pub fn into_dto(self) -> StarterStatusDto {
        match self {
            Self::Pending {
                pokemon_id,
                is_shiny,
            } => StarterStatusDto {
                pending: true,
                pokemon_id: Some(pokemon_id),
                is_shiny: Some(is_shiny),
            },
            Self::None => StarterStatusDto {
                pending: false,
                pokemon_id: None,
                is_shiny: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub uuid: String,
    pub balance: i64,
    pub username: String,
}

impl Balance {
    pub fn from_user(uuid: String, user: &User) -> Self {
        Self {
            uuid,
            balance: user.cobble_dollars_balance,
            username: user
                .minecraft_username
                .clone()
                .unwrap_or_else(|| UNKNOWN_USERNAME.to_string()),
        }
    }

    pub fn into_dto(self) -> BalanceDto {
        BalanceDto {
            uuid: self.uuid,
            balance: self.balance,
            username: self.username,
        }
    }
}
