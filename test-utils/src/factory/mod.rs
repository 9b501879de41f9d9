//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let purchase = factory::shop_purchase::create_purchase(&db, "uuid-1").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .minecraft_uuid("abc")
//!     .verification_code("123456")
//!     .banned(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `shop_purchase` - Create pending shop purchase entities
//! - `level_caps` - Create the level caps singleton
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod level_caps;
pub mod shop_purchase;
pub mod user;

pub use level_caps::create_level_caps;
pub use shop_purchase::create_purchase;
pub use user::{create_player, create_user};
