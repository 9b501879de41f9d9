pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_shop_purchase_table;
mod m20260105_000003_create_level_caps_table;
mod m20260105_000004_create_level_cap_change_table;
mod m20260112_000005_add_player_sync_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_shop_purchase_table::Migration),
            Box::new(m20260105_000003_create_level_caps_table::Migration),
            Box::new(m20260105_000004_create_level_cap_change_table::Migration),
            Box::new(m20260112_000005_add_player_sync_columns::Migration),
        ]
    }
}
