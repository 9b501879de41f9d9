use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{BanResultDto, BanUserDto, ResetResultDto, ResetStoreDto},
        api::ErrorDto,
    },
    server::{
        controller::extract::JsonBody,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::SetBanParam,
        service::admin::{check_reset_token, AdminService},
        state::AppState,
        util::parse::non_empty,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Ban or unban a player.
///
/// `banned` is only true when the body says `true`; anything else unbans. Banning
/// stamps the ban time and stores the optional reason, unbanning clears both.
///
/// # Access Control
/// - `Admin` - Only admins can ban players
///
/// # Returns
/// - `200 OK` - Ban state applied
/// - `400 Bad Request` - Missing UUID
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No user with that UUID
#[utoipa::path(
    post,
    path = "/api/admin/ban",
    tag = ADMIN_TAG,
    request_body = BanUserDto,
    responses(
        (status = 200, description = "Ban state applied", body = BanResultDto),
        (status = 400, description = "Missing UUID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ban_user(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<BanUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(minecraft_uuid) = non_empty(payload.uuid) else {
        return Err(AppError::BadRequest("Missing UUID".to_string()));
    };

    let banned = payload.banned == Some(true);

    let user = AdminService::new(&state.db)
        .set_ban(
            &admin,
            SetBanParam {
                minecraft_uuid,
                banned,
                reason: non_empty(payload.reason),
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(BanResultDto {
            success: true,
            banned: user.banned,
        }),
    ))
}

/// Delete every record in the data store.
///
/// The confirm token is checked before the session so a wrong token never reaches
/// the store. Reset is disabled when no token is configured.
///
/// # Access Control
/// - `Admin` - Only admins can reset the store
///
/// # Returns
/// - `200 OK` - Store emptied, with the number of deleted records
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Wrong token, reset disabled, or not an admin
#[utoipa::path(
    post,
    path = "/api/admin/reset",
    tag = ADMIN_TAG,
    request_body = ResetStoreDto,
    responses(
        (status = 200, description = "Store emptied", body = ResetResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Invalid token or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_store(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<ResetStoreDto>,
) -> Result<impl IntoResponse, AppError> {
    check_reset_token(
        payload.confirm_token.as_deref(),
        state.reset_confirm_token.as_deref(),
    )?;

    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted_count = AdminService::new(&state.db).reset_store(&admin).await?;

    Ok((
        StatusCode::OK,
        Json(ResetResultDto {
            success: true,
            message: format!(
                "Database reset complete. Deleted {} documents.",
                deleted_count
            ),
            deleted_count,
        }),
    ))
}
