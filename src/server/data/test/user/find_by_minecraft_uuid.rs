use super::*;

/// Tests finding an existing user by Minecraft UUID.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .minecraft_username("Steve")
        .balance(250)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_minecraft_uuid("abc").await?;

    let user = user.unwrap();
    assert_eq!(user.minecraft_uuid.as_deref(), Some("abc"));
    assert_eq!(user.minecraft_username.as_deref(), Some("Steve"));
    assert_eq!(user.cobble_dollars_balance, 250);

    Ok(())
}

/// Tests querying for a UUID that has no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_player(db, "abc").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_minecraft_uuid("does-not-exist").await?;

    assert!(user.is_none());

    Ok(())
}
