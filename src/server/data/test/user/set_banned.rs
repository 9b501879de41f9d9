use super::*;

/// Tests banning a player with a reason.
///
/// Expected: Ok(Some(User)) with banned, reason and timestamp set
#[tokio::test]
async fn bans_user_with_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_player(db, "abc").await?;

    let repo = UserRepository::new(db);
    let user = repo
        .set_banned(SetBanParam {
            minecraft_uuid: "abc".to_string(),
            banned: true,
            reason: Some("Griefing".to_string()),
        })
        .await?
        .unwrap();

    assert!(user.banned);
    assert_eq!(user.ban_reason.as_deref(), Some("Griefing"));
    assert!(user.banned_at.is_some());

    Ok(())
}

/// Tests unbanning clears the reason and timestamp.
///
/// Expected: Ok(Some(User)) with banned false and no reason or timestamp
#[tokio::test]
async fn unban_clears_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .banned(true)
        .ban_reason("Griefing")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .set_banned(SetBanParam {
            minecraft_uuid: "abc".to_string(),
            banned: false,
            reason: Some("ignored".to_string()),
        })
        .await?
        .unwrap();

    assert!(!user.banned);
    assert!(user.ban_reason.is_none());
    assert!(user.banned_at.is_none());

    Ok(())
}

/// Tests banning an unknown UUID.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .set_banned(SetBanParam {
            minecraft_uuid: "ghost".to_string(),
            banned: true,
            reason: None,
        })
        .await?;

    assert!(result.is_none());
    assert!(repo.find_by_minecraft_uuid("ghost").await?.is_none());

    Ok(())
}
