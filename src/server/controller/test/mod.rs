use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, Response, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tower::ServiceExt;

use crate::server::{
    middleware::auth::ACCESS_TOKEN_HEADER, model::auth::Credentials,
    service::token::TokenService, startup, state::AppState,
};
use test_utils::{builder::TestBuilder, factory, factory::battle::BattleFactory};


const USERNAME: &str = "admin";
const PASSWORD: &str = "hunter2";
const SECRET: &str = "test-secret";

/// Builds the layered application over a test database with `admin` / `hunter2` credentials.
fn app(db: DatabaseConnection) -> Router {
    let state = AppState::new(
        db,
        TokenService::new(SECRET),
        Credentials {
            username: USERNAME.to_string(),
            password_hash: bcrypt::hash(PASSWORD, 4).unwrap(),
        },
    );

    startup::app(state, Duration::from_secs(30))
}

/// Issues a token the test router accepts.
fn token() -> String {
    TokenService::new(SECRET).issue(USERNAME).unwrap()
}

async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .header(ACCESS_TOKEN_HEADER, token())
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
