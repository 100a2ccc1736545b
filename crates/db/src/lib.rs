//! Persistence layer for the movie catalog.
//!
//! Owns the SQLite connection pool, the embedded schema migrations, the row
//! models and one repository per table.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod fixtures;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet. An in-memory
/// database is private to the connection that opened it, so such a pool is
/// capped at one connection whatever `max_connections` says.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let capped = effective_max_connections(database_url, max_connections);
    if capped < max_connections {
        tracing::debug!(
            requested = max_connections,
            "In-memory database, pool limited to one connection"
        );
    }
    SqlitePoolOptions::new()
        .max_connections(capped)
        .connect_with(options)
        .await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn effective_max_connections(database_url: &str, requested: u32) -> u32 {
    if is_in_memory(database_url) {
        1
    } else {
        requested
    }
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
