//! Shared helpers for repository integration tests.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use scriptdepot_db::{schema, DbPool};

/// Fresh in-memory database with the schema bootstrapped.
///
/// A single connection, because every in-memory SQLite connection is
/// its own private database.
pub async fn test_pool() -> DbPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    schema::init_schema(&pool).await.expect("schema bootstrap");
    pool
}
