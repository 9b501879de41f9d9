//! Test scaffolding for the portal: an in-memory SQLite store with only the tables a
//! test asks for, a session sharing that store, and factories that insert rows with
//! sensible defaults.
//!
//! ```rust,ignore
//! let mut test = TestBuilder::new().with_table(User).build().await?;
//! let (db, session) = test.db_and_session().await?;
//! let user = UserFactory::new(db).minecraft_uuid("uuid-1").build().await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
