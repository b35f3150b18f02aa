//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! battle records, their aggregate statistics and operation parameters. Domain models are
//! converted from entity models at the repository boundary and transformed to DTOs at the
//! controller boundary.

pub mod auth;
pub mod battle;
pub mod stats;
