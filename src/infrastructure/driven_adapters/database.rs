//! Database Connection Management
//!
//! Utilities for creating the connection pool and applying migrations.

use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns `sqlx::Error` if the initial connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}

/// Apply the bundled migrations
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
