use crate::server::error::config::ConfigError;

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_addr: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Discord IDs promoted to admin at startup and on first login.
    pub admin_discord_ids: Vec<u64>,
    /// Shared secret for the full data reset. Reset is disabled when unset.
    pub reset_confirm_token: Option<String>,
    /// Enables the test data seeding endpoint.
    pub seed_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            admin_discord_ids: parse_discord_ids(
                "ADMIN_DISCORD_IDS",
                optional("ADMIN_DISCORD_IDS").as_deref(),
            )?,
            reset_confirm_token: optional("RESET_CONFIRM_TOKEN"),
            seed_enabled: parse_flag("SEED_ENABLED", optional("SEED_ENABLED").as_deref())?,
        })
    }
}

fn parse_discord_ids(name: &str, value: Option<&str>) -> Result<Vec<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: format!("'{}' is not a Discord ID: {}", id, e),
            })
        })
        .collect()
}

fn parse_flag(name: &str, value: Option<&str>) -> Result<bool, ConfigError> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("false") | Some("0") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some(other) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected true/false, got '{}'", other),
        }),
    }
}
