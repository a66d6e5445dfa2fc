use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// Installs the global tracing subscriber.
///
/// Log verbosity is taken from `RUST_LOG` and falls back to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .connect_timeout(config.database_connect_timeout)
        .acquire_timeout(config.database_connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the full application with state and middleware applied.
pub fn build_app(db: DatabaseConnection) -> Router {
    router::router()
        .with_state(AppState::new(db))
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves requests until Ctrl+C is received.
///
/// # Returns
/// - `Ok(())` - Server shut down gracefully
/// - `Err(AppError::IoErr)` - Failed to bind the address or serve connections
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(&config.app_address).await?;

    tracing::info!("Listening on {}", config.app_address);

    axum::serve(listener, build_app(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
