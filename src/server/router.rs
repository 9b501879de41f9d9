use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, level_caps, player, seed, shop, user, verification},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Cobblemon Portal API"),
    tags(
        (name = "auth", description = "Discord login"),
        (name = "player", description = "Player status for the Minecraft plugin"),
        (name = "verification", description = "Minecraft account verification"),
        (name = "shop", description = "Balance and purchase delivery"),
        (name = "user", description = "Public user listing"),
        (name = "admin", description = "Moderation and maintenance"),
        (name = "level_caps", description = "Level cap configuration"),
        (name = "seed", description = "Test data seeding"),
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(player::ban_status))
        .routes(routes!(player::verification_status))
        .routes(routes!(player::starter))
        .routes(routes!(player::starter_given))
        .routes(routes!(player::list_players, player::sync_player))
        .routes(routes!(verification::verify))
        .routes(routes!(verification::generate))
        .routes(routes!(shop::balance))
        .routes(routes!(shop::purchases))
        .routes(routes!(shop::claim))
        .routes(routes!(user::get_users))
        .routes(routes!(admin::ban_user))
        .routes(routes!(admin::reset_store))
        .routes(routes!(seed::seed))
        .routes(routes!(level_caps::get_version))
        .routes(routes!(level_caps::get_config, level_caps::update_config))
        .routes(routes!(level_caps::get_history))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
