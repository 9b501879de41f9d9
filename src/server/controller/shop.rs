use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        shop::{BalanceDto, ClaimPurchaseDto, PendingPurchasesDto},
    },
    server::{
        controller::{
            extract::{JsonBody, QueryParams},
            param::UuidParam,
        },
        error::AppError,
        service::{player::PlayerService, shop::ShopService},
        state::AppState,
        util::parse::non_empty,
    },
};

/// Tag for grouping shop endpoints in OpenAPI documentation
pub static SHOP_TAG: &str = "shop";

/// Get the CobbleDollars balance of a player.
///
/// # Returns
/// - `200 OK` - Balance and display name
/// - `400 Bad Request` - Missing UUID
/// - `404 Not Found` - No user with that UUID
#[utoipa::path(
    get,
    path = "/api/shop/balance",
    tag = SHOP_TAG,
    params(UuidParam),
    responses(
        (status = 200, description = "Player balance", body = BalanceDto),
        (status = 400, description = "UUID is required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn balance(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UuidParam>,
) -> Result<impl IntoResponse, AppError> {
    let uuid = params.require()?;

    let balance = PlayerService::new(&state.db).balance(&uuid).await?;

    Ok((StatusCode::OK, Json(balance.into_dto())))
}

/// List unclaimed purchases waiting for in-game delivery.
#[utoipa::path(
    get,
    path = "/api/shop/purchases",
    tag = SHOP_TAG,
    params(UuidParam),
    responses(
        (status = 200, description = "Unclaimed purchases, oldest first", body = PendingPurchasesDto),
        (status = 400, description = "UUID is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn purchases(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UuidParam>,
) -> Result<impl IntoResponse, AppError> {
    let uuid = params.require()?;

    let purchases = ShopService::new(&state.db).pending_purchases(&uuid).await?;

    Ok((
        StatusCode::OK,
        Json(PendingPurchasesDto {
            uuid,
            purchases: purchases.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}

/// Mark a purchase as delivered.
///
/// # Returns
/// - `200 OK` - Purchase claimed
/// - `400 Bad Request` - Missing UUID or purchase ID
/// - `404 Not Found` - Purchase unknown, owned by another player or already claimed
#[utoipa::path(
    post,
    path = "/api/shop/claim",
    tag = SHOP_TAG,
    request_body = ClaimPurchaseDto,
    responses(
        (status = 200, description = "Purchase claimed", body = MessageDto),
        (status = 400, description = "UUID and purchaseId are required", body = ErrorDto),
        (status = 404, description = "Purchase not found or already claimed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ClaimPurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(uuid), Some(purchase_id)) = (non_empty(payload.uuid), payload.purchase_id) else {
        return Err(AppError::BadRequest(
            "UUID and purchaseId are required".to_string(),
        ));
    };

    ShopService::new(&state.db).claim(&uuid, purchase_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            success: true,
            message: "Purchase marked as claimed".to_string(),
        }),
    ))
}
