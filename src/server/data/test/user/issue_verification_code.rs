use super::*;

/// Tests issuing a code to a Minecraft account seen for the first time.
///
/// Expected: Ok with an unverified user holding the code
#[tokio::test]
async fn creates_user_with_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .issue_verification_code(IssueVerificationCodeParam {
            minecraft_uuid: "abc".to_string(),
            minecraft_username: "Steve".to_string(),
            code: "123456".to_string(),
        })
        .await?;

    assert_eq!(user.minecraft_uuid.as_deref(), Some("abc"));
    assert_eq!(user.minecraft_username.as_deref(), Some("Steve"));
    assert_eq!(user.verification_code.as_deref(), Some("123456"));
    assert!(!user.verified);

    Ok(())
}

/// Tests that a new code replaces the previous one.
///
/// Only one code may be active per user; the old code must stop matching and the
/// user returns to unverified.
///
/// Expected: Ok with the same user, new code, verified reset to false
#[tokio::test]
async fn replaces_previous_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .verification_code("111111")
        .verified(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .issue_verification_code(IssueVerificationCodeParam {
            minecraft_uuid: "abc".to_string(),
            minecraft_username: "Steve".to_string(),
            code: "222222".to_string(),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.verification_code.as_deref(), Some("222222"));
    assert!(!user.verified);
    assert!(repo.find_by_uuid_and_code("abc", "111111").await?.is_none());

    Ok(())
}
