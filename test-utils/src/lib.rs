//! Armory Test Utils
//!
//! Shared testing utilities for the armory backend. Provides a builder for
//! creating test contexts backed by in-memory SQLite databases, a session
//! helper for exercising authentication paths, and entity factories that cut
//! down the boilerplate of setting up users, games, and loadouts in tests.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_game_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_loadout_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
