//! Persistence layer for the script administration core.
//!
//! Owns the SQLite pool, the idempotent schema bootstrap, and the
//! repository structs that implement the entity and association
//! operations. The pool is an explicit handle passed into every
//! repository call; there is no process-wide database state.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use scriptdepot_core::error::CoreError;

pub mod error;
pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::SqlitePool;

/// Upper bound on waiting for a pooled connection. A wedged store
/// surfaces [`CoreError::Timeout`] instead of hanging the caller.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
///
/// Foreign-key enforcement is switched on explicitly: the cascade
/// rules on `script_customers` depend on it.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
}

/// Verify the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), CoreError> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(error::map_sqlx_error)?;
    Ok(())
}
