use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::config;

pub mod query;
pub mod repositories;
pub mod repository;

/// Build the process-wide connection pool. Called once at startup; the
/// pool handle is then cloned into every repository.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    pool_options().connect(database_url).await
}

/// Like [`connect`] but without touching the database: connections are
/// established on first use, so the server can boot while the database
/// is down. Errors only on a malformed URL.
pub fn connect_lazy(database_url: &str) -> Result<PgPool, sqlx::Error> {
    pool_options().connect_lazy(database_url)
}

fn pool_options() -> PgPoolOptions {
    let db_config = &config::config().database;

    PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.connect_timeout_secs))
}

/// Pings the pool to ensure connectivity.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
