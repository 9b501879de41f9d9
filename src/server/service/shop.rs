use sea_orm::DatabaseConnection;

use crate::server::{
    data::shop_purchase::ShopPurchaseRepository, error::AppError, model::shop::Purchase,
};

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets purchases the plugin still has to hand out.
    pub async fn pending_purchases(&self, uuid: &str) -> Result<Vec<Purchase>, AppError> {
        let purchases = ShopPurchaseRepository::new(self.db)
            .get_unclaimed_by_uuid(uuid)
            .await?;

        Ok(purchases)
    }

    /// Claims a purchase after the plugin delivered it.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown purchase, another player's purchase, or
    ///   already claimed
    pub async fn claim(&self, uuid: &str, purchase_id: i32) -> Result<(), AppError> {
        let claimed = ShopPurchaseRepository::new(self.db)
            .claim(uuid, purchase_id)
            .await?;

        if !claimed {
            return Err(AppError::NotFound(
                "Purchase not found or already claimed".to_string(),
            ));
        }

        tracing::info!("Purchase {} claimed by {}", purchase_id, uuid);

        Ok(())
    }
}
