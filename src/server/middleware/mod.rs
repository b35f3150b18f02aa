//! Request middleware.
//!
//! - `auth` - Access token gate wrapping the protected battle routes

pub mod auth;
