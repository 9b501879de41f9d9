//! Level caps configuration domain models.
//!
//! The singleton document holds the global configuration plus the static and
//! time-based rule lists. Rules are managed by the game server plugin and are
//! carried here as opaque JSON so they take part in the version hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{
    model::level_caps::{
        CustomMessagesDto, EnforcementModeDto, GlobalLevelCapConfigDto, LevelCapChangeDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// Length of the hex prefix used as the configuration version.
const VERSION_LENGTH: usize = 8;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomMessages {
    pub capture_failed: String,
    pub exp_blocked: String,
    pub item_blocked: String,
    pub trade_blocked: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementMode {
    Hard,
    Soft,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalLevelCapConfig {
    pub capture_cap_enabled: bool,
    pub ownership_cap_enabled: bool,
    pub default_capture_cap_formula: String,
    pub default_ownership_cap_formula: String,
    pub enforcement_mode: EnforcementMode,
    pub custom_messages: CustomMessages,
}

impl Default for GlobalLevelCapConfig {
    fn default() -> Self {
        Self {
            capture_cap_enabled: true,
            ownership_cap_enabled: true,
            default_capture_cap_formula: "50".to_string(),
            default_ownership_cap_formula: "100".to_string(),
            enforcement_mode: EnforcementMode::Hard,
            custom_messages: CustomMessages {
                capture_failed: "§c¡El Pokémon es demasiado poderoso para capturarlo!".to_string(),
                exp_blocked: "§eHa alcanzado el nivel máximo permitido.".to_string(),
                item_blocked: "§cNo puedes usar este item. Tu Pokémon ya alcanzó el nivel máximo."
                    .to_string(),
                trade_blocked: "§cNo puedes recibir este Pokémon. Su nivel excede tu límite."
                    .to_string(),
            },
        }
    }
}

impl GlobalLevelCapConfig {
    pub fn into_dto(self) -> GlobalLevelCapConfigDto {
        GlobalLevelCapConfigDto {
            capture_cap_enabled: self.capture_cap_enabled,
            ownership_cap_enabled: self.ownership_cap_enabled,
            default_capture_cap_formula: self.default_capture_cap_formula,
            default_ownership_cap_formula: self.default_ownership_cap_formula,
            enforcement_mode: match self.enforcement_mode {
                EnforcementMode::Hard => EnforcementModeDto::Hard,
                EnforcementMode::Soft => EnforcementModeDto::Soft,
            },
            custom_messages: CustomMessagesDto {
                capture_failed: self.custom_messages.capture_failed,
                exp_blocked: self.custom_messages.exp_blocked,
                item_blocked: self.custom_messages.item_blocked,
                trade_blocked: self.custom_messages.trade_blocked,
            },
        }
    }

    /// Serializes the configuration for storage in a JSON column.
    pub fn to_json(&self) -> Result<serde_json::Value, AppError> {
        serde_json::to_value(self).map_err(|e| InternalError::MalformedLevelCaps(e).into())
    }
}

impl From<GlobalLevelCapConfigDto> for GlobalLevelCapConfig {
    fn from(dto: GlobalLevelCapConfigDto) -> Self {
        Self {
            capture_cap_enabled: dto.capture_cap_enabled,
            ownership_cap_enabled: dto.ownership_cap_enabled,
            default_capture_cap_formula: dto.default_capture_cap_formula,
            default_ownership_cap_formula: dto.default_ownership_cap_formula,
            enforcement_mode: match dto.enforcement_mode {
                EnforcementModeDto::Hard => EnforcementMode::Hard,
                EnforcementModeDto::Soft => EnforcementMode::Soft,
            },
            custom_messages: CustomMessages {
                capture_failed: dto.custom_messages.capture_failed,
                exp_blocked: dto.custom_messages.exp_blocked,
                item_blocked: dto.custom_messages.item_blocked,
                trade_blocked: dto.custom_messages.trade_blocked,
            },
        }
    }
}

/// The level caps singleton.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCaps {
    pub global_config: GlobalLevelCapConfig,
    pub static_rules: serde_json::Value,
    pub time_based_rules: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl LevelCaps {
    /// Converts the stored row, failing if the global configuration JSON is malformed.
    pub fn from_entity(entity: entity::level_caps::Model) -> Result<Self, AppError> {
        let global_config = serde_json::from_value(entity.global_config)
            .map_err(InternalError::MalformedLevelCaps)?;

        Ok(Self {
            global_config,
            static_rules: entity.static_rules,
            time_based_rules: entity.time_based_rules,
            updated_at: entity.updated_at,
        })
    }

    /// Content hash used by clients for cache invalidation.
    ///
    /// SHA-256 over the JSON of the three rule fields and `updatedAt`, truncated to
    /// 8 hex characters. Identical content always yields the same version.
    pub fn version(&self) -> Result<String, AppError> {
        let version_data = serde_json::json!({
            "globalConfig": self.global_config.to_json()?,
            "staticRules": self.static_rules,
            "timeBasedRules": self.time_based_rules,
            "updatedAt": self.updated_at,
        });

        let mut hasher = Sha256::new();
        hasher.update(version_data.to_string().as_bytes());
        let mut hex = format!("{:x}", hasher.finalize());
        hex.truncate(VERSION_LENGTH);

        Ok(hex)
    }
}

/// One entry of the level caps audit log.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCapChange {
    pub timestamp: DateTime<Utc>,
    pub admin: String,
    pub action: String,
    pub before: serde_json::Value,
    pub after: serde_json::Value,
    pub reason: String,
}

impl LevelCapChange {
    pub fn from_entity(entity: entity::level_cap_change::Model) -> Self {
        Self {
            timestamp: entity.timestamp,
            admin: entity.admin,
            action: entity.action,
            before: entity.before,
            after: entity.after,
            reason: entity.reason,
        }
    }

    pub fn into_dto(self) -> LevelCapChangeDto {
        LevelCapChangeDto {
            timestamp: self.timestamp,
            admin: self.admin,
            action: self.action,
            before: self.before,
            after: self.after,
            reason: self.reason,
        }
    }
}

/// Parameters for replacing the global configuration.
#[derive(Debug, Clone)]
pub struct UpdateGlobalConfigParam {
    /// Name of the admin recorded in the audit log.
    pub admin: String,
    pub config: GlobalLevelCapConfig,
}
