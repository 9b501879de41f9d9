use super::*;

/// Tests promoting listed Discord IDs to admin.
///
/// Expected: only listed, non-admin users are updated
#[tokio::test]
async fn promotes_listed_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("111")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("222")
        .admin(true)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("333")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_admin_by_discord_ids(&[111, 222, 999]).await?;

    assert_eq!(updated, 1);
    assert!(repo.find_by_discord_id(111).await?.unwrap().is_admin);
    assert!(repo.find_by_discord_id(222).await?.unwrap().is_admin);
    assert!(!repo.find_by_discord_id(333).await?.unwrap().is_admin);

    Ok(())
}

/// Tests an empty allow-list.
///
/// Expected: Ok(0) without touching the table
#[tokio::test]
async fn empty_list_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("111")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.set_admin_by_discord_ids(&[]).await?, 0);
    assert!(!repo.find_by_discord_id(111).await?.unwrap().is_admin);

    Ok(())
}
