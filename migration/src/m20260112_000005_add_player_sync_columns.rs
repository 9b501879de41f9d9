use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// SQLite applies one column change per ALTER TABLE.
fn sync_columns() -> Vec<ColumnDef> {
    vec![
        boolean(User::MinecraftOnline).default(false).to_owned(),
        timestamp_with_time_zone_null(User::MinecraftLastSeen),
        timestamp_with_time_zone_null(User::SyncedAt),
        json_null(User::PokemonParty),
        json_null(User::PcStorage),
        json_null(User::Inventory),
        json_null(User::EnderChest),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for mut column in sync_columns() {
            manager
                .alter_table(
                    Table::alter()
                        .table(User::Table)
                        .add_column(&mut column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            User::EnderChest,
            User::Inventory,
            User::PcStorage,
            User::PokemonParty,
            User::SyncedAt,
            User::MinecraftLastSeen,
            User::MinecraftOnline,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(User::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
