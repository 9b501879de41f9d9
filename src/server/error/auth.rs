use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

const NOT_AUTHENTICATED: &str = "No autenticado. Inicia sesión primero.";
const NOT_AUTHORIZED: &str = "No autorizado. Requieres permisos de administrador.";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No Discord ID stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// Discord ID from the session has no matching user record.
    #[error("User {0} not found in database")]
    UserNotInDatabase(u64),

    /// User exists but lacks the required permission.
    ///
    /// # Fields
    /// - Discord ID of the user
    /// - Description of the denied action, logged server side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Discord rejected the authorization code exchange.
    #[error("Failed to exchange OAuth2 authorization code: {0}")]
    TokenExchange(String),

    /// Reset confirmation token missing, wrong, or reset disabled.
    #[error("Invalid reset confirmation token")]
    InvalidResetToken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` → 401 Unauthorized
/// - `UserNotInDatabase` / `AccessDenied` / `InvalidResetToken` → 403 Forbidden
/// - `CsrfValidationFailed` / `TokenExchange` → 400 Bad Request
///
/// Details are logged at debug level; clients only see the fixed messages.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, NOT_AUTHENTICATED),
            Self::UserNotInDatabase(_) | Self::AccessDenied(_, _) => {
                (StatusCode::FORBIDDEN, NOT_AUTHORIZED)
            }
            Self::InvalidResetToken => (StatusCode::FORBIDDEN, "Invalid token"),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
