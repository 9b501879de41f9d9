use super::*;

/// Tests deleting the singleton and its history.
///
/// Expected: Ok(2) for one configuration row plus one change row
#[tokio::test]
async fn deletes_config_and_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelCapsRepository::new(db);
    repo.update_global_config(UpdateGlobalConfigParam {
        admin: "AdminUser".to_string(),
        config: GlobalLevelCapConfig::default(),
    })
    .await?;

    assert_eq!(repo.delete_all().await?, 2);
    assert!(repo.get().await?.is_none());
    assert!(repo.get_history(50).await?.is_empty());

    Ok(())
}
