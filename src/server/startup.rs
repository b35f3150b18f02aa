use axum::{
    http::{header, Method, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, middleware::auth::ACCESS_TOKEN_HEADER, router,
    service::battle::BattleService, state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise `battle_api=info,tower_http=info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("battle_api=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Imports battles from the configured seed file when the store is empty.
///
/// Does nothing when `BATTLES_SEED_PATH` is unset.
///
/// # Returns
/// - `Ok(())` - Seeding finished or was not needed
/// - `Err(AppError)` - Seed file unreadable or malformed, or database error
pub async fn seed_battles(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(path) = &config.seed_path else {
        return Ok(());
    };

    BattleService::new(db).seed_from_file(path).await?;

    Ok(())
}

/// Builds the application router wrapped in the request timeout, tracing and CORS layers.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    with_layers(router::router(state), request_timeout)
}

/// Applies the server-wide layers to `router`.
///
/// Requests running longer than `request_timeout` are answered with 408 Request Timeout.
pub fn with_layers(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors())
}

/// CORS policy allowing browser clients to call the API and send the access token header.
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static(ACCESS_TOKEN_HEADER),
        ])
}

/// Resolves when the process receives Ctrl-C.
///
/// Never resolves if the signal handler cannot be installed.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
