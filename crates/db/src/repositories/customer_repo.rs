//! Repository for the `customers` table.

use scriptdepot_core::error::CoreError;

use crate::error::map_sqlx_error;
use crate::models::customer::{CreateCustomer, Customer};
use crate::DbPool;

/// Column list for `customers` queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for customer organizations.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer with a caller-assigned id.
    ///
    /// Fails with `Validation` on an empty id or name, and with
    /// `Conflict` when the id or name already exists.
    pub async fn create(pool: &DbPool, input: &CreateCustomer) -> Result<Customer, CoreError> {
        if input.id.is_empty() {
            return Err(CoreError::Validation(
                "customer id must not be empty".to_string(),
            ));
        }
        if input.name.is_empty() {
            return Err(CoreError::Validation(
                "customer name must not be empty".to_string(),
            ));
        }

        let query = format!("INSERT INTO customers (id, name) VALUES ($1, $2) RETURNING {COLUMNS}");
        let customer = sqlx::query_as::<_, Customer>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::debug!(id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Find a customer by its id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Customer>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// List all customers, ordered by name.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Customer>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY name");
        sqlx::query_as::<_, Customer>(&query)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Delete a customer by id. Cascade removes all of its script
    /// assignments; the scripts themselves are untouched.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "customer",
                id: id.to_string(),
            });
        }

        tracing::debug!(%id, "customer deleted");
        Ok(())
    }
}
