mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    model::auth::Credentials,
    service::token::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_battles(&db, &config).await?;

    let state = AppState::new(
        db,
        TokenService::new(&config.jwt_secret),
        Credentials {
            username: config.api_username.clone(),
            password_hash: config.api_password_hash.clone(),
        },
    );

    let app = startup::app(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
