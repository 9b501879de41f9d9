//! Typed accessors over the tower-sessions `Session`.
//!
//! Session keys live here and nowhere else. `AuthSession` holds the logged in
//! Discord ID, `CsrfSession` holds the OAuth state for a single login round-trip.

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Discord identity of the logged in user.
///
/// The ID is stored as a string, the same representation as the `discord_id`
/// column, and parsed back on read.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as logged in as `user_id`.
    pub async fn set_user_id(&self, user_id: u64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Gets the Discord ID of the logged in user.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::InternalErr)` - Stored value is not a Discord ID
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(Some(parse_u64_from_string(user_id)?))
    }

    /// Logs out by deleting the session record and invalidating the cookie.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// OAuth state token for the Discord login.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the state sent to Discord, replacing any unfinished login.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes and returns the stored state, so each token is checked at most once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
