use super::*;

/// Tests replacing the global configuration.
///
/// Expected: configuration stored and one history entry recording before and after
#[tokio::test]
async fn updates_config_and_records_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelCapsRepository::new(db);
    let before = repo.get_or_create_default().await?;

    let mut config = GlobalLevelCapConfig::default();
    config.enforcement_mode = EnforcementMode::Soft;
    config.default_capture_cap_formula = "60".to_string();

    let updated = repo
        .update_global_config(UpdateGlobalConfigParam {
            admin: "AdminUser".to_string(),
            config: config.clone(),
        })
        .await?;

    assert_eq!(updated.global_config, config);
    assert!(updated.updated_at >= before.updated_at);
    assert_eq!(repo.get().await?.unwrap().global_config, config);

    let history = repo.get_history(50).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].admin, "AdminUser");
    assert_eq!(history[0].action, "update_global_config");
    assert_eq!(history[0].reason, "Manual config update");
    assert_eq!(history[0].before["enforcementMode"], "hard");
    assert_eq!(history[0].after["enforcementMode"], "soft");

    Ok(())
}

/// Tests updating before the singleton exists.
///
/// Expected: singleton created from defaults, then updated
#[tokio::test]
async fn creates_singleton_before_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut config = GlobalLevelCapConfig::default();
    config.capture_cap_enabled = false;

    let repo = LevelCapsRepository::new(db);
    let updated = repo
        .update_global_config(UpdateGlobalConfigParam {
            admin: "AdminUser".to_string(),
            config,
        })
        .await?;

    assert!(!updated.global_config.capture_cap_enabled);
    assert_eq!(repo.get_history(50).await?[0].before["captureCapEnabled"], true);

    Ok(())
}

/// Tests that each history entry chains onto the previous one.
///
/// Expected: the second entry's `before` is the first entry's `after`
#[tokio::test]
async fn history_snapshots_chain() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_level_caps_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelCapsRepository::new(db);

    let mut first = GlobalLevelCapConfig::default();
    first.default_capture_cap_formula = "20".to_string();
    let mut second = GlobalLevelCapConfig::default();
    second.default_capture_cap_formula = "30".to_string();

    for config in [first, second] {
        repo.update_global_config(UpdateGlobalConfigParam {
            admin: "AdminUser".to_string(),
            config,
        })
        .await?;
    }

    let history = repo.get_history(50).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].before, history[1].after);
    assert_eq!(history[0].after["defaultCaptureCapFormula"], "30");

    Ok(())
}
