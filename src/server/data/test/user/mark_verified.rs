use super::*;
use sea_orm::EntityTrait;

/// Tests redeeming a verification code.
///
/// Expected: verified set, timestamp stamped, code moved to last_verification_code
/// and the pending code cleared
#[tokio::test]
async fn marks_user_verified_and_clears_code() -> Result<(), DbErr> {
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
    let user = repo.mark_verified(created.id, "123456".to_string()).await?;

    assert!(user.verified);
    assert!(user.verified_at.is_some());
    assert!(user.verification_code.is_none());

    let stored = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_verification_code.as_deref(), Some("123456"));
    assert!(stored.verification_code.is_none());

    Ok(())
}
