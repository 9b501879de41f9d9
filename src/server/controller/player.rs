//! Player status endpoints polled by the Minecraft plugin.
//!
//! None of these require a session. Unknown players are reported with default
//! values instead of 404 so the plugin can treat them as new.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        player::{
            BanStatusDto, PlayersDto, StarterGivenDto, StarterStatusDto, SyncPlayerDto,
            SyncResultDto, VerificationStatusDto,
        },
    },
    server::{
        controller::{
            extract::{JsonBody, QueryParams},
            param::UuidParam,
        },
        error::AppError,
        model::user::SyncPlayerParam,
        service::player::PlayerService,
        state::AppState,
        util::parse::non_empty,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Get the ban status of a player.
#[utoipa::path(
    get,
    path = "/api/players/ban-status",
    tag = PLAYER_TAG,
    params(UuidParam),
    responses(
        (status = 200, description = "Ban status, unbanned for unknown players", body = BanStatusDto),
        (status = 400, description = "UUID is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ban_status(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UuidParam>,
) -> Result<impl IntoResponse, AppError> {
    let uuid = params.require()?;

    let status = PlayerService::new(&state.db).ban_status(&uuid).await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Get the verification status of a player.
#[utoipa::path(
    get,
    path = "/api/players/verification-status",
    tag = PLAYER_TAG,
    params(UuidParam),
    responses(
        (status = 200, description = "Verification status, all false for unknown players", body = VerificationStatusDto),
        (status = 400, description = "UUID is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verification_status(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UuidParam>,
) -> Result<impl IntoResponse, AppError> {
    let uuid = params.require()?;

    let status = PlayerService::new(&state.db)
        .verification_status(&uuid)
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Get the pending starter delivery for a player.
#[utoipa::path(
    get,
    path = "/api/players/starter",
    tag = PLAYER_TAG,
    params(UuidParam),
    responses(
        (status = 200, description = "Pending starter, if any", body = StarterStatusDto),
        (status = 400, description = "UUID is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn starter(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UuidParam>,
) -> Result<impl IntoResponse, AppError> {
    let uuid = params.require()?;

    let status = PlayerService::new(&state.db).starter_status(&uuid).await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Mark the starter of a player as delivered.
///
/// `given` defaults to `true`; sending `false` re-queues the delivery.
#[utoipa::path(
    post,
    path = "/api/players/starter-given",
    tag = PLAYER_TAG,
    request_body = StarterGivenDto,
    responses(
        (status = 200, description = "Delivery flag updated", body = SuccessDto),
        (status = 400, description = "UUID is required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn starter_given(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<StarterGivenDto>,
) -> Result<impl IntoResponse, AppError> {
    let uuid = UuidParam { uuid: payload.uuid }.require()?;
    let given = payload.given != Some(false);

    PlayerService::new(&state.db)
        .set_starter_given(&uuid, given)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Record the state of a player pushed by the Minecraft server.
///
/// Creates the player on first sight. The response carries the stored ban flag so
/// the server can kick a banned player right away.
#[utoipa::path(
    post,
    path = "/api/players/sync",
    tag = PLAYER_TAG,
    request_body = SyncPlayerDto,
    responses(
        (status = 200, description = "Player stored", body = SyncResultDto),
        (status = 400, description = "UUID and username required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_player(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SyncPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(minecraft_uuid), Some(minecraft_username)) =
        (non_empty(payload.uuid), non_empty(payload.username))
    else {
        return Err(AppError::BadRequest(
            "UUID and username required".to_string(),
        ));
    };

    let last_seen = payload
        .last_seen
        .and_then(|value| DateTime::parse_from_rfc3339(&value).ok())
        .map(|value| value.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let player = PlayerService::new(&state.db)
        .sync(SyncPlayerParam {
            minecraft_uuid,
            minecraft_username,
            online: payload.online.unwrap_or(false),
            last_seen,
            cobble_dollars_balance: payload.cobble_dollars_balance.unwrap_or(0),
            pokemon_party: list_or_empty(payload.party),
            pc_storage: list_or_empty(payload.pc_storage),
            inventory: list_or_empty(payload.inventory),
            ender_chest: list_or_empty(payload.ender_chest),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(SyncResultDto {
            success: true,
            banned: player.banned,
        }),
    ))
}

/// List every player known from the Minecraft server.
#[utoipa::path(
    get,
    path = "/api/players/sync",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Players ordered by username", body = PlayersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db).list_players().await?;

    Ok((
        StatusCode::OK,
        Json(PlayersDto {
            players: players.into_iter().map(|user| user.into_player_dto()).collect(),
        }),
    ))
}

fn list_or_empty(value: Value) -> Value {
    match value {
        Value::Array(_) => value,
        _ => Value::Array(Vec::new()),
    }
}
