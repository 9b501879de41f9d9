//! Shop purchase repository.
//!
//! Purchases are written by the purchase flow and drained by the game server plugin,
//! which polls the unclaimed subset for a player and claims each one after delivery.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::shop::Purchase;

pub struct ShopPurchaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShopPurchaseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the unclaimed purchases for a Minecraft UUID, oldest first.
    pub async fn get_unclaimed_by_uuid(&self, uuid: &str) -> Result<Vec<Purchase>, DbErr> {
        let entities = entity::prelude::ShopPurchase::find()
            .filter(entity::shop_purchase::Column::Uuid.eq(uuid))
            .filter(entity::shop_purchase::Column::Claimed.eq(false))
            .order_by_asc(entity::shop_purchase::Column::PurchasedAt)
            .order_by_asc(entity::shop_purchase::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Purchase::from_entity).collect())
    }

    /// Marks a purchase as claimed.
    ///
    /// The update only matches an unclaimed purchase owned by `uuid`, so a purchase
    /// can be claimed at most once and never by another player.
    ///
    /// # Returns
    /// - `Ok(true)` - Purchase claimed
    /// - `Ok(false)` - No unclaimed purchase with that ID for the UUID
    pub async fn claim(&self, uuid: &str, purchase_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ShopPurchase::update_many()
            .col_expr(entity::shop_purchase::Column::Claimed, Expr::value(true))
            .col_expr(
                entity::shop_purchase::Column::ClaimedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::shop_purchase::Column::Id.eq(purchase_id))
            .filter(entity::shop_purchase::Column::Uuid.eq(uuid))
            .filter(entity::shop_purchase::Column::Claimed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::ShopPurchase::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
