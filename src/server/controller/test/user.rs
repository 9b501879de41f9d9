use axum::{extract::State, http::StatusCode, response::IntoResponse};
use test_utils::{builder::TestBuilder, factory};

use super::{json_body, test_state};
use crate::server::{controller::user, error::AppError};

/// Tests listing users with a starter.
///
/// Expected: only the user with a starter, without any verification code field
#[tokio::test]
async fn lists_only_users_with_starter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .verification_code("123456")
        .starter(4, false)
        .build()
        .await?;
    factory::user::create_player(db, "def").await?;

    let response = user::get_users(State(test_state(db))).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["minecraftUuid"], "abc");
    assert_eq!(users[0]["starterId"], 4);
    assert!(users[0].get("verificationCode").is_none());

    Ok(())
}
