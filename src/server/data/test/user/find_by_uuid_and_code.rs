use super::*;

/// Tests matching a pending verification code.
///
/// Expected: Ok(Some(User)) when both UUID and code match
#[tokio::test]
async fn finds_user_with_matching_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .verification_code("123456")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_uuid_and_code("abc", "123456").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that a code only matches the account it was issued to.
///
/// Expected: Ok(None) for a wrong code and for the right code under another UUID
#[tokio::test]
async fn requires_both_uuid_and_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .verification_code("123456")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .minecraft_uuid("def")
        .verification_code("654321")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_uuid_and_code("abc", "000000").await?.is_none());
    assert!(repo.find_by_uuid_and_code("def", "123456").await?.is_none());

    Ok(())
}
