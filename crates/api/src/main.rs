use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_db::fixtures::{self, Fixtures};
use catalog_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_api=debug,catalog_db=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = catalog_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!(database_url = %config.database_url, "Database connection pool created");

    catalog_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    catalog_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    if let Some(path) = &config.seed_file {
        seed_catalog(&pool, path).await;
    }

    // --- Router ---
    let state = AppState { pool };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Import the fixture file at `path` if the catalog holds no rows yet.
///
/// A catalog that already has data is left alone so restarts never
/// duplicate or clobber rows.
async fn seed_catalog(pool: &DbPool, path: &str) {
    let is_empty = fixtures::catalog_is_empty(pool)
        .await
        .expect("Failed to inspect catalog tables");
    if !is_empty {
        tracing::info!(path, "Catalog already populated, skipping fixtures");
        return;
    }

    let json = tokio::fs::read_to_string(path)
        .await
        .unwrap_or_else(|e| panic!("Failed to read fixture file '{path}': {e}"));
    let document = Fixtures::from_json(&json)
        .unwrap_or_else(|e| panic!("Invalid fixture file '{path}': {e}"));
    fixtures::load(pool, &document)
        .await
        .expect("Failed to load fixtures");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
