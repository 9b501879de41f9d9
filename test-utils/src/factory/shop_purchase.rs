//! Shop purchase factory for creating pending purchase entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shop purchases.
pub struct ShopPurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: String,
    username: String,
    ball_id: String,
    quantity: i32,
    claimed: bool,
}

impl<'a> ShopPurchaseFactory<'a> {
    /// Creates a new factory for a purchase owned by the given Minecraft UUID.
    ///
    /// Defaults to one unclaimed `poke_ball`.
    pub fn new(db: &'a DatabaseConnection, uuid: impl Into<String>) -> Self {
        Self {
            db,
            uuid: uuid.into(),
            username: "Unknown".to_string(),
            ball_id: "poke_ball".to_string(),
            quantity: 1,
            claimed: false,
        }
    }

    pub fn ball_id(mut self, ball_id: impl Into<String>) -> Self {
        self.ball_id = ball_id.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn claimed(mut self, claimed: bool) -> Self {
        self.claimed = claimed;
        self
    }

    pub async fn build(self) -> Result<entity::shop_purchase::Model, DbErr> {
        let now = Utc::now();
        entity::shop_purchase::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            username: ActiveValue::Set(self.username),
            ball_id: ActiveValue::Set(self.ball_id),
            quantity: ActiveValue::Set(self.quantity),
            purchased_at: ActiveValue::Set(now),
            claimed: ActiveValue::Set(self.claimed),
            claimed_at: ActiveValue::Set(if self.claimed { Some(now) } else { None }),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unclaimed purchase with default values for the given UUID.
pub async fn create_purchase(
    db: &DatabaseConnection,
    uuid: impl Into<String>,
) -> Result<entity::shop_purchase::Model, DbErr> {
    ShopPurchaseFactory::new(db, uuid).build().await
}
