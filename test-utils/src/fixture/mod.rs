//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let battle = fixture::battle::entity();
//!
//! // Create with custom fields
//! let ambush = fixture::battle::entity_builder()
//!     .battle_type("ambush")
//!     .build();
//! ```

pub mod battle;

pub use battle::{entity as battle_entity, entity_builder as battle_entity_builder};
