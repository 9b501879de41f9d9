use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopPurchase::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopPurchase::Id))
                    .col(string(ShopPurchase::Uuid))
                    .col(string(ShopPurchase::Username))
                    .col(string(ShopPurchase::BallId))
                    .col(integer(ShopPurchase::Quantity))
                    .col(timestamp_with_time_zone(ShopPurchase::PurchasedAt))
                    .col(boolean(ShopPurchase::Claimed).default(false))
                    .col(timestamp_with_time_zone_null(ShopPurchase::ClaimedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shop_purchase_uuid")
                    .table(ShopPurchase::Table)
                    .col(ShopPurchase::Uuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopPurchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopPurchase {
    Table,
    Id,
    Uuid,
    Username,
    BallId,
    Quantity,
    PurchasedAt,
    Claimed,
    ClaimedAt,
}
