//! SeaORM entities for every collection persisted by the portal.

pub mod prelude;

pub mod level_cap_change;
pub mod level_caps;
pub mod shop_purchase;
pub mod user;
