use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::AppError, util::parse::non_empty};

/// Query parameter identifying a player by Minecraft UUID.
#[derive(Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UuidParam {
    /// Minecraft UUID of the player
    pub uuid: Option<String>,
}

impl UuidParam {
    /// Returns the UUID or a 400 when it is missing or blank.
    pub fn require(self) -> Result<String, AppError> {
        non_empty(self.uuid).ok_or_else(|| AppError::BadRequest("UUID is required".to_string()))
    }
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}
