//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting battle records with sensible defaults,
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
//!     // Create with defaults
//!     let battle = factory::battle::create_battle(&db).await?;
//!
//!     // Customize through the builder
//!     let ambush = factory::battle::BattleFactory::new(&db)
//!         .with(|b| b.attacker_king("Robb Stark").battle_type("ambush"))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `battle` - Create battle record entities
//! - `helpers` - Shared ID generation

pub mod battle;
pub mod helpers;

pub use battle::{create_battle, create_battles};
