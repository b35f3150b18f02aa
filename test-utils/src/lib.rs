//! Battle API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the battle
//! records API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories and fixtures for battle records.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert battle records with sensible defaults
//! - **fixture**: Build battle entity models without touching the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_battle_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_battle_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     factory::battle::create_battle(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
