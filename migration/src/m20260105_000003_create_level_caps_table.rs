use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LevelCaps::Table)
                    .if_not_exists()
                    .col(integer(LevelCaps::Id).primary_key())
                    .col(json(LevelCaps::GlobalConfig))
                    .col(json(LevelCaps::StaticRules))
                    .col(json(LevelCaps::TimeBasedRules))
                    .col(timestamp_with_time_zone(LevelCaps::CreatedAt))
                    .col(timestamp_with_time_zone(LevelCaps::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LevelCaps::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LevelCaps {
    Table,
    Id,
    GlobalConfig,
    StaticRules,
    TimeBasedRules,
    CreatedAt,
    UpdatedAt,
}
