//! Domain models for authentication.

use serde::{Deserialize, Serialize};

/// Operator credentials the login endpoint checks against.
///
/// The password is only ever held as a bcrypt hash.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Expected username, compared for exact match.
    pub username: String,
    /// Bcrypt hash of the expected password.
    pub password_hash: String,
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub id: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}
