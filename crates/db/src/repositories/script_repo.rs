//! Repository for the `scripts` and `script_customers` tables.
//!
//! The customer assignment set of a script is only ever written as a
//! side effect of script create/update. A rewrite replaces the whole
//! set (delete-all-then-insert) and runs in the same transaction as
//! the script row mutation, so no reader observes a transient empty
//! set and concurrent updates to the same script cannot interleave.

use std::collections::BTreeSet;

use chrono::Utc;
use sqlx::{Sqlite, Transaction};
use uuid::Uuid;

use scriptdepot_core::error::CoreError;

use crate::error::map_sqlx_error;
use crate::models::script::{CreateScript, Script, ScriptWithCustomers, UpdateScript};
use crate::DbPool;

/// Column list for `scripts` queries.
const COLUMNS: &str = "\
    id, name, command, description, category, \
    is_global, auto_enrollment, created_at, updated_at";

/// Provides CRUD operations for scripts and their customer assignments.
pub struct ScriptRepo;

impl ScriptRepo {
    /// Insert a new script with a generated id.
    ///
    /// The script row and its assignment rows are written in one
    /// transaction. An unknown customer id aborts the whole operation
    /// with `Conflict`; nothing is partially applied.
    pub async fn create(
        pool: &DbPool,
        input: &CreateScript,
    ) -> Result<ScriptWithCustomers, CoreError> {
        validate_fields(&input.name, &input.command)?;

        // UUIDv7 is time-ordered, so generated ids cannot collide
        // with earlier ones in practice.
        let id = Uuid::now_v7().to_string();
        let now = Utc::now();

        let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            "INSERT INTO scripts \
                (id, name, command, description, category, \
                 is_global, auto_enrollment, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.command)
        .bind(input.description.as_deref().unwrap_or(""))
        .bind(input.category.as_str())
        .bind(input.is_global.unwrap_or(false))
        .bind(input.auto_enrollment.unwrap_or(false))
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        Self::insert_assignments(&mut tx, &id, &input.customer_ids).await?;

        tx.commit().await.map_err(map_sqlx_error)?;
        tracing::debug!(%id, "script created");

        Self::find_by_id(pool, &id)
            .await?
            .ok_or_else(|| CoreError::Store(format!("script {id} missing after insert")))
    }

    /// Find a script by id, enriched with its assigned customer ids.
    pub async fn find_by_id(
        pool: &DbPool,
        id: &str,
    ) -> Result<Option<ScriptWithCustomers>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM scripts WHERE id = $1");
        let script = sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?;

        match script {
            Some(script) => {
                let customers = Self::customers_for_script(pool, &script.id).await?;
                Ok(Some(ScriptWithCustomers { script, customers }))
            }
            None => Ok(None),
        }
    }

    /// List all scripts with their customer assignments, most recently
    /// updated first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<ScriptWithCustomers>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM scripts ORDER BY updated_at DESC");
        let scripts = sqlx::query_as::<_, Script>(&query)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut result = Vec::with_capacity(scripts.len());
        for script in scripts {
            let customers = Self::customers_for_script(pool, &script.id).await?;
            result.push(ScriptWithCustomers { script, customers });
        }
        Ok(result)
    }

    /// Replace a script: overwrite all scalar fields, refresh
    /// `updated_at`, and rewrite the customer assignment set.
    ///
    /// Fails with `NotFound` when no script with `id` exists. The row
    /// update and the assignment rewrite run in one transaction.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateScript,
    ) -> Result<ScriptWithCustomers, CoreError> {
        validate_fields(&input.name, &input.command)?;

        let now = Utc::now();
        let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(
            "UPDATE scripts SET \
                name = $2, command = $3, description = $4, category = $5, \
                is_global = $6, auto_enrollment = $7, updated_at = $8 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.command)
        .bind(input.description.as_deref().unwrap_or(""))
        .bind(input.category.as_str())
        .bind(input.is_global.unwrap_or(false))
        .bind(input.auto_enrollment.unwrap_or(false))
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "script",
                id: id.to_string(),
            });
        }

        sqlx::query("DELETE FROM script_customers WHERE script_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        Self::insert_assignments(&mut tx, id, &input.customer_ids).await?;

        tx.commit().await.map_err(map_sqlx_error)?;
        tracing::debug!(%id, "script updated");

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::Store(format!("script {id} missing after update")))
    }

    /// Delete a script by id. Cascade removes its assignment rows;
    /// customer rows are untouched.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scripts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "script",
                id: id.to_string(),
            });
        }

        tracing::debug!(%id, "script deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Assignment helpers
    // -----------------------------------------------------------------------

    /// Resolve the customer ids assigned to a script.
    ///
    /// Always re-queries the junction table; ordered by customer name
    /// for determinism.
    pub async fn customers_for_script(
        pool: &DbPool,
        script_id: &str,
    ) -> Result<Vec<String>, CoreError> {
        sqlx::query_scalar::<_, String>(
            "SELECT c.id \
             FROM customers c \
             JOIN script_customers sc ON sc.customer_id = c.id \
             WHERE sc.script_id = $1 \
             ORDER BY c.name",
        )
        .bind(script_id)
        .fetch_all(pool)
        .await
        .map_err(map_sqlx_error)
    }

    /// Insert one assignment row per distinct customer id, within the
    /// caller's transaction.
    ///
    /// A customer id that does not reference an existing customer
    /// trips the foreign-key constraint, which surfaces as `Conflict`
    /// and rolls back the whole transaction.
    async fn insert_assignments(
        tx: &mut Transaction<'_, Sqlite>,
        script_id: &str,
        customer_ids: &[String],
    ) -> Result<(), CoreError> {
        let unique: BTreeSet<&str> = customer_ids.iter().map(String::as_str).collect();
        for customer_id in unique {
            sqlx::query("INSERT INTO script_customers (script_id, customer_id) VALUES ($1, $2)")
                .bind(script_id)
                .bind(customer_id)
                .execute(&mut **tx)
                .await
                .map_err(map_sqlx_error)?;
        }
        Ok(())
    }
}

/// Reject empty required fields before any store operation.
fn validate_fields(name: &str, command: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "script name must not be empty".to_string(),
        ));
    }
    if command.is_empty() {
        return Err(CoreError::Validation(
            "script command must not be empty".to_string(),
        ));
    }
    Ok(())
}
