use super::*;

/// Tests that only users with a rolled starter are listed.
///
/// Expected: Ok(Vec<User>) containing only the users with a starter
#[tokio::test]
async fn lists_only_users_with_starter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .starter(1, false)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("2")
        .starter(4, true)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("3")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.get_with_starter().await?;

    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.starter_id.is_some()));

    Ok(())
}

/// Tests listing when nobody has rolled yet.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_starters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_with_starter().await?;

    assert!(users.is_empty());

    Ok(())
}
