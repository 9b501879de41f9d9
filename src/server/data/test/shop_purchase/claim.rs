use super::*;

/// Tests claiming a pending purchase.
///
/// Expected: Ok(true) and the purchase no longer listed as pending
#[tokio::test]
async fn claims_pending_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopPurchase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let purchase = factory::create_purchase(db, "abc").await?;

    let repo = ShopPurchaseRepository::new(db);

    assert!(repo.claim("abc", purchase.id).await?);
    assert!(repo.get_unclaimed_by_uuid("abc").await?.is_empty());

    Ok(())
}

/// Tests that a purchase can only be claimed once.
///
/// Expected: Ok(false) on the second claim
#[tokio::test]
async fn cannot_claim_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopPurchase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let purchase = factory::create_purchase(db, "abc").await?;

    let repo = ShopPurchaseRepository::new(db);

    assert!(repo.claim("abc", purchase.id).await?);
    assert!(!repo.claim("abc", purchase.id).await?);

    Ok(())
}

/// Tests that another player cannot claim someone else's purchase.
///
/// Expected: Ok(false) and the purchase stays pending for its owner
#[tokio::test]
async fn cannot_claim_other_players_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopPurchase)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let purchase = factory::create_purchase(db, "abc").await?;

    let repo = ShopPurchaseRepository::new(db);

    assert!(!repo.claim("def", purchase.id).await?);
    assert_eq!(repo.get_unclaimed_by_uuid("abc").await?.len(), 1);

    Ok(())
}
