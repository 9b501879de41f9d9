pub use super::level_cap_change::Entity as LevelCapChange;
pub use super::level_caps::Entity as LevelCaps;
pub use super::shop_purchase::Entity as ShopPurchase;
pub use super::user::Entity as User;
