//! Wire-level DTOs shared by the HTTP API.
//!
//! These types define the JSON bodies the API accepts and returns. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod auth;
pub mod battle;
