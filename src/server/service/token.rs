use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::collections::HashSet;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Claims,
};

/// Lifetime of an issued access token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Signs and verifies HS256 access tokens with the server secret.
///
/// Expiry is checked here against an explicit clock rather than inside
/// `jsonwebtoken`, which lets tests verify tokens at arbitrary instants.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service keyed with the given shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Issues a token for `username` valid from now.
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        self.issue_at(username, Utc::now())
    }

    /// Issues a token for `username` as if signed at `issued_at`.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token with `id`, `iat` and `exp` claims
    /// - `Err(AppError::TokenErr)` - Signing failed
    pub fn issue_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            id: username.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token's signature and checks it has not expired at `now`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Malformed, wrongly signed or expired token
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::from(["exp".to_string()]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::InvalidToken(format!(
                "token for '{}' expired at {}",
                claims.id, claims.exp
            )));
        }

        Ok(claims)
    }
}
