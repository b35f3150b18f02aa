//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for the battle store
//! - Token service for signing and verifying access tokens
//! - Operator credentials checked by the login endpoint

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{model::auth::Credentials, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone and immutable after startup, so requests share no
/// mutable in-process state:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds precomputed signing keys
/// - `Arc<Credentials>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the battle store.
    pub db: DatabaseConnection,

    /// Signs access tokens at login and verifies them in the auth middleware.
    pub tokens: TokenService,

    /// Username and bcrypt password hash accepted by the login endpoint.
    pub credentials: Arc<Credentials>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service keyed with the server secret
    /// - `credentials` - Operator credentials for login
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, credentials: Credentials) -> Self {
        Self {
            db,
            tokens,
            credentials: Arc::new(credentials),
        }
    }
}
