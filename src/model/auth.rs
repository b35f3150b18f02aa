use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request body.
///
/// Missing fields deserialize as empty strings so that an incomplete body is
/// rejected as bad credentials rather than as malformed JSON.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login outcome: `{auth: true, token}` on success, `{auth: false, token: null}` otherwise.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub auth: bool,
    pub token: Option<String>,
}

/// Body returned by the authentication gate when a request is turned away.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuthFailureDto {
    pub auth: bool,
    pub message: String,
}
