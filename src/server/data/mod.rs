//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! collection the portal persists. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and business logic
//! layer. Every lookup is a filtered point query on an indexed correlation key.

pub mod level_caps;
pub mod shop_purchase;
pub mod user;

#[cfg(test)]
mod test;
