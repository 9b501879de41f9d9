use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        admin::{SeedActionDto, SeedResultDto},
        api::ErrorDto,
    },
    server::{
        controller::extract::JsonBody, error::AppError, service::seed::SeedService,
        state::AppState,
    },
};

/// Tag for grouping seeding endpoints in OpenAPI documentation
pub static SEED_TAG: &str = "seed";

/// Create or remove the fake test users.
///
/// Every call is a 404 unless `SEED_ENABLED` is set.
///
/// # Returns
/// - `200 OK` - Users created (or already present) or removed
/// - `400 Bad Request` - Action other than `seed` or `clear`
/// - `404 Not Found` - Seeding disabled
#[utoipa::path(
    post,
    path = "/api/seed",
    tag = SEED_TAG,
    request_body = SeedActionDto,
    responses(
        (status = 200, description = "Action applied", body = SeedResultDto),
        (status = 400, description = "Invalid action", body = ErrorDto),
        (status = 404, description = "Seeding disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SeedActionDto>,
) -> Result<impl IntoResponse, AppError> {
    if !state.seed_enabled {
        return Err(AppError::NotFound("Not found".to_string()));
    }

    let seed_service = SeedService::new(&state.db);

    let result = match payload.action.as_deref() {
        Some("seed") => {
            let users = seed_service.seed().await?;

            SeedResultDto {
                success: true,
                message: "Usuarios de prueba creados".to_string(),
                users: Some(users.into_iter().map(|u| u.into_dto()).collect()),
            }
        }
        Some("clear") => {
            seed_service.clear().await?;

            SeedResultDto {
                success: true,
                message: "Usuarios de prueba eliminados".to_string(),
                users: None,
            }
        }
        _ => return Err(AppError::BadRequest("Acción no válida".to_string())),
    };

    Ok((StatusCode::OK, Json(result)))
}
