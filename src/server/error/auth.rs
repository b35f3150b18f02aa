use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::auth::{AuthFailureDto, LoginResponseDto};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access token was supplied on a protected request.
    ///
    /// Results in a 403 Forbidden response.
    #[error("No access token provided")]
    MissingToken,

    /// The supplied access token failed signature, format or expiry checks.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Access token rejected: {0}")]
    InvalidToken(String),

    /// The login username or password did not match the configured credentials.
    ///
    /// Results in a 401 Unauthorized response carrying `{auth: false, token: null}`.
    #[error("Login rejected for user '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 403 Forbidden with "No token provided."
/// - `InvalidToken` → 401 Unauthorized with "Failed to authenticate token."
/// - `InvalidCredentials` → 401 Unauthorized with the login failure body
///
/// All errors are logged at debug level while the client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => (
                StatusCode::FORBIDDEN,
                Json(AuthFailureDto {
                    auth: false,
                    message: "No token provided.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(AuthFailureDto {
                    auth: false,
                    message: "Failed to authenticate token.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponseDto {
                    auth: false,
                    token: None,
                }),
            )
                .into_response(),
        }
    }
}
