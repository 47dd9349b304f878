//! Customer organization entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `customers` table.
///
/// The id is caller-assigned and immutable; the name is unique across
/// all customers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

/// DTO for inserting a new customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub id: String,
    pub name: String,
}
