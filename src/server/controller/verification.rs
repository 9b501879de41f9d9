use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        verification::{GenerateCodeDto, VerifyCodeDto, VerifyResultDto},
    },
    server::{
        controller::extract::JsonBody,
        error::{AppError, INVALID_BODY},
        model::user::IssueVerificationCodeParam,
        service::verification::{VerificationService, VerifyOutcome},
        state::AppState,
        util::parse::non_empty,
    },
};

/// Tag for grouping verification endpoints in OpenAPI documentation
pub static VERIFICATION_TAG: &str = "verification";

const MISSING_FIELDS: &str = "Missing required fields";

/// Redeem a verification code.
///
/// A wrong or already used code is a soft failure: 200 with `success: false`.
///
/// # Returns
/// - `200 OK` - `{success: true, message}` or `{success: false, error}`
/// - `400 Bad Request` - Missing UUID or code, or a body that is not JSON
#[utoipa::path(
    post,
    path = "/api/verification/verify",
    tag = VERIFICATION_TAG,
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Verification attempted", body = VerifyResultDto),
        (status = 400, description = "Missing required fields", body = VerifyResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify(
    State(state): State<AppState>,
    payload: Result<JsonBody<VerifyCodeDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let Ok(JsonBody(payload)) = payload else {
        return Ok(verify_rejected(INVALID_BODY));
    };

    let (Some(minecraft_uuid), Some(code)) =
        (non_empty(payload.minecraft_uuid), non_empty(payload.code))
    else {
        return Ok(verify_rejected(MISSING_FIELDS));
    };

    let outcome = VerificationService::new(&state.db)
        .verify(&minecraft_uuid, &code)
        .await?;

    let result = match outcome {
        VerifyOutcome::Verified(_) => VerifyResultDto {
            success: true,
            message: Some("Verification successful".to_string()),
            error: None,
        },
        VerifyOutcome::InvalidCode => VerifyResultDto {
            success: false,
            message: None,
            error: Some("Invalid verification code".to_string()),
        },
    };

    Ok((StatusCode::OK, Json(result)))
}

/// 400 in the `{success: false, error}` shape the plugin parses for this endpoint.
fn verify_rejected(error: &str) -> (StatusCode, Json<VerifyResultDto>) {
    (
        StatusCode::BAD_REQUEST,
        Json(VerifyResultDto {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }),
    )
}

/// Issue a verification code for a player.
///
/// Called by the Minecraft plugin. Creates the player record on first contact and
/// replaces any code still pending.
#[utoipa::path(
    post,
    path = "/api/verification/generate",
    tag = VERIFICATION_TAG,
    request_body = GenerateCodeDto,
    responses(
        (status = 200, description = "Code stored", body = SuccessDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GenerateCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(minecraft_uuid), Some(minecraft_username), Some(code)) = (
        non_empty(payload.minecraft_uuid),
        non_empty(payload.minecraft_username),
        non_empty(payload.code),
    ) else {
        return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
    };

    VerificationService::new(&state.db)
        .issue_code(IssueVerificationCodeParam {
            minecraft_uuid,
            minecraft_username,
            code,
        })
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
