use super::*;

/// Tests ordering and limiting of the change history.
///
/// Expected: at most `limit` entries, newest first
#[tokio::test]
async fn returns_newest_first_up_to_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelCapsRepository::new(db);

    for formula in ["10", "20", "30"] {
        let mut config = GlobalLevelCapConfig::default();
        config.default_capture_cap_formula = formula.to_string();
        repo.update_global_config(UpdateGlobalConfigParam {
            admin: "AdminUser".to_string(),
            config,
        })
        .await?;
    }

    let history = repo.get_history(2).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].after["defaultCaptureCapFormula"], "30");
    assert_eq!(history[1].after["defaultCaptureCapFormula"], "20");

    Ok(())
}

/// Tests history without any change.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelCapsRepository::new(db);

    assert!(repo.get_history(50).await?.is_empty());

    Ok(())
}
