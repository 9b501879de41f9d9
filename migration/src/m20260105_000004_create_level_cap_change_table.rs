use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LevelCapChange::Table)
                    .if_not_exists()
                    .col(pk_auto(LevelCapChange::Id))
                    .col(timestamp_with_time_zone(LevelCapChange::Timestamp))
                    .col(string(LevelCapChange::Admin))
                    .col(string(LevelCapChange::Action))
                    .col(json(LevelCapChange::Before))
                    .col(json(LevelCapChange::After))
                    .col(string(LevelCapChange::Reason))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LevelCapChange::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LevelCapChange {
    Table,
    Id,
    Timestamp,
    Admin,
    Action,
    Before,
    After,
    Reason,
}
