//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data layer boundary,
//! services operate on them, and controllers convert them into DTOs for responses.

pub mod level_caps;
pub mod player;
pub mod shop;
pub mod user;
