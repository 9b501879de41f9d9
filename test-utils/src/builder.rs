use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which portal tables a test needs before opening its in-memory store.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ShopPurchase)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a `CREATE TABLE` derived from the entity definition.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Level caps singleton plus its change log.
    pub fn with_level_caps_tables(self) -> Self {
        self.with_table(LevelCaps).with_table(LevelCapChange)
    }

    /// Every persisted table, for tests spanning collections such as the reset.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(ShopPurchase)
            .with_level_caps_tables()
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::default();
        context.create_tables(self.tables).await?;
        Ok(context)
    }
}
