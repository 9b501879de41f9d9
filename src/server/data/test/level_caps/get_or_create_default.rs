use super::*;

/// Tests first access without a stored configuration.
///
/// Expected: the default configuration is created and `get` finds it afterwards
#[tokio::test]
async fn creates_default_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelCapsRepository::new(db);
    assert!(repo.get().await?.is_none());

    let level_caps = repo.get_or_create_default().await?;

    assert_eq!(level_caps.global_config, GlobalLevelCapConfig::default());
    assert_eq!(level_caps.static_rules, serde_json::json!([]));
    assert!(repo.get().await?.is_some());

    Ok(())
}

/// Tests that an existing configuration is returned as stored.
///
/// Expected: stored configuration, not the default
#[tokio::test]
async fn returns_existing_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_level_caps(db).await?;

    let repo = LevelCapsRepository::new(db);
    let level_caps = repo.get_or_create_default().await?;

    assert_eq!(level_caps.global_config.custom_messages.exp_blocked, "exp blocked");

    Ok(())
}

/// Tests two first accesses racing on the insert.
///
/// Expected: both succeed and see the same single row
#[tokio::test]
async fn concurrent_first_access_creates_one_row() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelCapsRepository::new(db);
    let (first, second) = tokio::join!(repo.get_or_create_default(), repo.get_or_create_default());

    assert_eq!(first?.updated_at, second?.updated_at);
    assert_eq!(entity::prelude::LevelCaps::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a second call does not overwrite what the first stored.
///
/// Expected: the stored configuration survives a repeated default insert
#[tokio::test]
async fn repeated_access_keeps_stored_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_level_caps(db).await?;

    let repo = LevelCapsRepository::new(db);
    repo.get_or_create_default().await?;
    let level_caps = repo.get_or_create_default().await?;

    assert_eq!(level_caps.global_config.custom_messages.exp_blocked, "exp blocked");

    Ok(())
}
