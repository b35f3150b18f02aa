use axum::http::{
    header::{HeaderName, AUTHORIZATION},
    HeaderMap, HeaderValue,
};
use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, ACCESS_TOKEN_HEADER},
    service::token::{TokenService, TOKEN_TTL_HOURS},
};


fn headers_with(name: HeaderName, value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(name, HeaderValue::from_str(value).unwrap());
    headers
}

fn access_token_headers(token: &str) -> HeaderMap {
    headers_with(HeaderName::from_static(ACCESS_TOKEN_HEADER), token)
}
