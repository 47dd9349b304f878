//! Idempotent schema bootstrap.
//!
//! Three tables: `customers`, `scripts`, and the `script_customers`
//! junction table. All statements are create-if-absent so the
//! bootstrap can run unconditionally at startup.

use scriptdepot_core::error::CoreError;

use crate::error::map_sqlx_error;
use crate::DbPool;

const CREATE_CUSTOMERS: &str = "\
    CREATE TABLE IF NOT EXISTS customers (\
        id TEXT PRIMARY KEY, \
        name TEXT NOT NULL UNIQUE\
    )";

const CREATE_SCRIPTS: &str = "\
    CREATE TABLE IF NOT EXISTS scripts (\
        id TEXT PRIMARY KEY, \
        name TEXT NOT NULL, \
        command TEXT NOT NULL, \
        description TEXT NOT NULL DEFAULT '', \
        category TEXT NOT NULL CHECK (\
            category IN ('software', 'security', 'configuration', 'command')\
        ), \
        is_global INTEGER NOT NULL DEFAULT 0, \
        auto_enrollment INTEGER NOT NULL DEFAULT 0, \
        created_at TEXT NOT NULL, \
        updated_at TEXT NOT NULL\
    )";

const CREATE_SCRIPT_CUSTOMERS: &str = "\
    CREATE TABLE IF NOT EXISTS script_customers (\
        script_id TEXT NOT NULL REFERENCES scripts(id) ON DELETE CASCADE, \
        customer_id TEXT NOT NULL REFERENCES customers(id) ON DELETE CASCADE, \
        PRIMARY KEY (script_id, customer_id)\
    )";

/// Create the three tables if they do not already exist.
pub async fn init_schema(pool: &DbPool) -> Result<(), CoreError> {
    for statement in [CREATE_CUSTOMERS, CREATE_SCRIPTS, CREATE_SCRIPT_CUSTOMERS] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;
    }
    tracing::info!("database schema initialized");
    Ok(())
}
