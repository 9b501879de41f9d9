use super::*;

/// Tests recording starter delivery.
///
/// Expected: Ok(Some(User)) with starter_given true
#[tokio::test]
async fn marks_starter_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .starter(25, false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.set_starter_given("abc", true).await?.unwrap();

    assert!(user.starter_given);
    assert_eq!(user.starter_id, Some(25));

    Ok(())
}

/// Tests recording delivery for an unknown UUID.
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

    let repo = UserRepository::new(db);

    assert!(repo.set_starter_given("ghost", true).await?.is_none());

    Ok(())
}
