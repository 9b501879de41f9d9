//! Handles built once in `main` and cloned into every request via `State`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::Config;

/// Discord OAuth2 client with the auth, token and redirect endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests. Redirects are disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Discord IDs that are written as admins when they log in.
    pub admin_discord_ids: Arc<Vec<u64>>,

    /// Confirmation token for the full data reset, `None` disables reset.
    pub reset_confirm_token: Option<String>,

    /// Whether the test data seeding endpoint is available.
    pub seed_enabled: bool,

    /// Application base URL, target of the post-login redirect.
    pub app_url: String,
}

impl AppState {
    /// Copies the runtime switches out of `config`.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            admin_discord_ids: Arc::new(config.admin_discord_ids.clone()),
            reset_confirm_token: config.reset_confirm_token.clone(),
            seed_enabled: config.seed_enabled,
            app_url: config.app_url.clone(),
        }
    }
}
