use super::*;

fn fake(discord_id: &str, starter_id: i32) -> CreateFakeUserParam {
    CreateFakeUserParam {
        discord_id: discord_id.to_string(),
        discord_username: format!("user_{}", discord_id),
        nickname: format!("User {}", discord_id),
        starter_id,
        starter_is_shiny: false,
    }
}

/// Tests inserting fake users.
///
/// Expected: Ok(Vec<User>) with every inserted user flagged fake and holding a starter
#[tokio::test]
async fn inserts_fake_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo
        .insert_fake_users(vec![fake("fake_001", 1), fake("fake_002", 4)])
        .await?;

    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.is_fake));
    assert_eq!(users[0].discord_id.as_deref(), Some("fake_001"));
    assert_eq!(users[1].starter_id, Some(4));

    Ok(())
}

/// Tests that clearing only removes fake users.
///
/// Expected: Ok(2) and the real user remains
#[tokio::test]
async fn deletes_only_fake_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let real = factory::user::create_player(db, "abc").await?;
    factory::user::UserFactory::new(db)
        .discord_id("fake_001")
        .fake(true)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("fake_002")
        .fake(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete_fake_users().await?;

    assert_eq!(deleted, 2);
    assert!(repo.get_fake_users().await?.is_empty());
    assert_eq!(
        repo.find_by_minecraft_uuid("abc").await?.map(|u| u.id),
        Some(real.id)
    );

    Ok(())
}

/// Tests deleting every user.
///
/// Expected: Ok(count of all users)
#[tokio::test]
async fn delete_all_removes_everyone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_player(db, "abc").await?;
    factory::user::UserFactory::new(db).fake(true).build().await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.delete_all().await?, 3);
    assert!(repo.find_by_minecraft_uuid("abc").await?.is_none());

    Ok(())
}
