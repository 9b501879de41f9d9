use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertDiscordUserParam, User},
    state::OAuth2Client,
};

const DISCORD_USER_URL: &str = "https://discord.com/api/users/@me";

/// Discord login: authorize URL, code exchange and the user upsert that follows.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Authorize URL requesting only the `identify` scope, plus the state token to
    /// stash in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Trades `authorization_code` for a token, reads `/users/@me` and upserts the user.
    ///
    /// IDs in `admin_discord_ids` are written as admins. Anyone else keeps whatever
    /// admin flag is already stored. A rejected code surfaces as
    /// `AuthError::TokenExchange`.
    pub async fn callback(
        &self,
        authorization_code: String,
        admin_discord_ids: &[u64],
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;
        let discord_id = discord_user.id.get();

        let is_admin = if admin_discord_ids.contains(&discord_id) {
            Some(true)
        } else {
            None
        };

        let user = user_repo
            .upsert_discord_user(UpsertDiscordUserParam {
                discord_id,
                nickname: discord_user
                    .global_name
                    .clone()
                    .unwrap_or_else(|| discord_user.name.clone()),
                discord_username: discord_user.name,
                is_admin,
            })
            .await?;

        tracing::info!("User {} logged in", user.discord_username);

        Ok(user)
    }

    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let profile = self
            .http_client
            .get(DISCORD_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(profile)
    }
}
