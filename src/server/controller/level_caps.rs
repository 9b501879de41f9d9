use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        level_caps::{
            GlobalLevelCapConfigDto, LevelCapsConfigDto, LevelCapsHistoryDto, LevelCapsVersionDto,
        },
    },
    server::{
        controller::extract::JsonBody,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::level_caps::UpdateGlobalConfigParam,
        service::level_caps::LevelCapsService,
        state::AppState,
    },
};

/// Tag for grouping level cap endpoints in OpenAPI documentation
pub static LEVEL_CAPS_TAG: &str = "level_caps";

/// Get the current level cap configuration version.
///
/// Polled by the Minecraft plugin to decide whether to refetch its rules.
#[utoipa::path(
    get,
    path = "/api/level-caps/version",
    tag = LEVEL_CAPS_TAG,
    responses(
        (status = 200, description = "Configuration version", body = LevelCapsVersionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_version(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (version, timestamp) = LevelCapsService::new(&state.db).version().await?;

    Ok((
        StatusCode::OK,
        Json(LevelCapsVersionDto {
            success: true,
            version,
            timestamp,
        }),
    ))
}

/// Get the global level cap configuration, creating the default one if needed.
///
/// # Access Control
/// - `Admin` - Only admins can view the configuration
#[utoipa::path(
    get,
    path = "/api/admin/level-caps/config",
    tag = LEVEL_CAPS_TAG,
    responses(
        (status = 200, description = "Global configuration", body = LevelCapsConfigDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_config(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let config = LevelCapsService::new(&state.db).get_config().await?;

    Ok((
        StatusCode::OK,
        Json(LevelCapsConfigDto {
            success: true,
            config: config.into_dto(),
        }),
    ))
}

/// Replace the global level cap configuration.
///
/// Every update is recorded in the change history under the admin's username.
///
/// # Access Control
/// - `Admin` - Only admins can change the configuration
#[utoipa::path(
    put,
    path = "/api/admin/level-caps/config",
    tag = LEVEL_CAPS_TAG,
    request_body = GlobalLevelCapConfigDto,
    responses(
        (status = 200, description = "Configuration updated", body = LevelCapsConfigDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_config(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<GlobalLevelCapConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let config = LevelCapsService::new(&state.db)
        .update_config(UpdateGlobalConfigParam {
            admin: admin.discord_username,
            config: payload.into(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(LevelCapsConfigDto {
            success: true,
            config: config.into_dto(),
        }),
    ))
}

/// Get the most recent level cap changes, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can view the history
#[utoipa::path(
    get,
    path = "/api/admin/level-caps/history",
    tag = LEVEL_CAPS_TAG,
    responses(
        (status = 200, description = "Up to 50 most recent changes", body = LevelCapsHistoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let history = LevelCapsService::new(&state.db).history().await?;

    Ok((
        StatusCode::OK,
        Json(LevelCapsHistoryDto {
            success: true,
            history: history.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}
