use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Claims,
    service::token::TokenService,
    state::AppState,
};

/// Header carrying the access token issued by the login endpoint.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Verifies the access token carried by a request's headers.
    ///
    /// The token is read from `x-access-token`, falling back to an
    /// `Authorization: Bearer` header.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token present, authentic and unexpired
    /// - `Err(AuthError::MissingToken)` - No token supplied
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    pub fn require(&self, headers: &HeaderMap) -> Result<Claims, AppError> {
        let Some(token) = extract_token(headers) else {
            return Err(AuthError::MissingToken.into());
        };

        Ok(self.tokens.verify(token)?)
    }
}

fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let access_token = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let bearer = || {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
            .map(|(_, token)| token)
    };

    access_token
        .or_else(bearer)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware rejecting requests without a valid access token.
///
/// On success the verified `Claims` are stored as a request extension and the
/// request continues unchanged.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(request.headers())?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
