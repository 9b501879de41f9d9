//! Handler tests.
//!
//! Handlers are called directly with extracted arguments and the response is
//! inspected as it would reach the client: status code plus JSON body.

mod user;

use axum::{body::to_bytes, response::Response};
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, startup::setup_oauth_client, state::AppState};

const TEST_RESET_TOKEN: &str = "reset-me";

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        app_url: "http://localhost:8080".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        discord_client_id: "client_id".to_string(),
        discord_client_secret: "client_secret".to_string(),
        discord_redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        admin_discord_ids: vec![],
        reset_confirm_token: Some(TEST_RESET_TOKEN.to_string()),
        seed_enabled: true,
    }
}

/// Builds application state around a test database.
fn test_state(db: &DatabaseConnection) -> AppState {
    state_with_config(db, &test_config())
}

fn state_with_config(db: &DatabaseConnection, config: &Config) -> AppState {
    let oauth_client = setup_oauth_client(config).unwrap();

    AppState::new(db.clone(), reqwest::Client::new(), oauth_client, config)
}

/// Reads a response body as JSON.
async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
