use super::*;

/// Tests creating a new user on first Discord login.
///
/// Expected: Ok with user created and admin status set to false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_discord_user(UpsertDiscordUserParam {
            discord_id: 123456789,
            discord_username: "trainer".to_string(),
            nickname: "Trainer".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.discord_id.as_deref(), Some("123456789"));
    assert_eq!(user.discord_username, "trainer");
    assert_eq!(user.nickname, "Trainer");
    assert!(user.minecraft_uuid.is_none());
    assert!(!user.is_admin);

    Ok(())
}

/// Tests that a regular login keeps an existing admin flag.
///
/// Expected: Ok with the updated name and admin still true
#[tokio::test]
async fn preserves_admin_when_not_specified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .discord_username("old_name")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_discord_user(UpsertDiscordUserParam {
            discord_id: 123456789,
            discord_username: "new_name".to_string(),
            nickname: "New Name".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.discord_username, "new_name");
    assert!(user.is_admin);

    Ok(())
}

/// Tests granting admin through the upsert.
///
/// Expected: Ok with admin set to true on the existing record
#[tokio::test]
async fn grants_admin_when_specified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert_discord_user(UpsertDiscordUserParam {
            discord_id: 123456789,
            discord_username: "trainer".to_string(),
            nickname: "Trainer".to_string(),
            is_admin: Some(true),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert!(user.is_admin);

    Ok(())
}
