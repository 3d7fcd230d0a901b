//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key relationships, keeping tests
//! concise.
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
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let game = factory::game::create_game(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, game, loadout) =
//!         factory::helpers::create_loadout_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db, user.id)
//!     .name("Valorant")
//!     .genre("Shooter")
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod helpers;
pub mod loadout;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use game::create_game;
pub use loadout::create_loadout;
pub use user::create_user;
