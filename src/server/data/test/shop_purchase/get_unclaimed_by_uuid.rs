use super::*;

/// Tests listing pending purchases for a player.
///
/// Expected: only unclaimed purchases owned by the UUID are returned
#[tokio::test]
async fn returns_only_unclaimed_for_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopPurchase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::shop_purchase::ShopPurchaseFactory::new(db, "abc")
        .ball_id("ultra_ball")
        .quantity(5)
        .build()
        .await?;
    factory::shop_purchase::ShopPurchaseFactory::new(db, "abc")
        .claimed(true)
        .build()
        .await?;
    factory::create_purchase(db, "def").await?;

    let repo = ShopPurchaseRepository::new(db);
    let purchases = repo.get_unclaimed_by_uuid("abc").await?;

    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].ball_id, "ultra_ball");
    assert_eq!(purchases[0].quantity, 5);
    assert!(!purchases[0].claimed);

    Ok(())
}

/// Tests a player without purchases.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopPurchase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShopPurchaseRepository::new(db);

    assert!(repo.get_unclaimed_by_uuid("ghost").await?.is_empty());

    Ok(())
}
