use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange operator credentials for an access token.
///
/// Verifies the password against the configured bcrypt hash and the username for an
/// exact match. On success returns a token valid for 24 hours, to be sent on protected
/// requests in the `x-access-token` header.
///
/// # Returns
/// - `200 OK` - `{auth: true, token}`
/// - `401 Unauthorized` - `{auth: false, token: null}`
/// - `500 Internal Server Error` - Misconfigured password hash or signing failure
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponseDto),
        (status = 401, description = "Credentials rejected", body = LoginResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.credentials, &state.tokens);

    let token = auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            auth: true,
            token: Some(token),
        }),
    ))
}
