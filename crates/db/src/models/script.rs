//! Automation script entity model and DTOs.
//!
//! The `command` payload is opaque text: it is stored and returned
//! verbatim, never parsed or executed by this system. Scripts are
//! linked to customer organizations via the `script_customers`
//! junction table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scriptdepot_core::category::ScriptCategory;
use scriptdepot_core::types::Timestamp;

/// A row from the `scripts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Script {
    pub id: String,
    pub name: String,
    pub command: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub category: ScriptCategory,
    pub is_global: bool,
    pub auto_enrollment: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A script enriched with the ids of its assigned customers.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptWithCustomers {
    #[serde(flatten)]
    pub script: Script,
    pub customers: Vec<String>,
}

/// DTO for inserting a new script. The id and both timestamps are
/// generated server-side at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScript {
    pub name: String,
    pub command: String,
    pub description: Option<String>,
    pub category: ScriptCategory,
    pub is_global: Option<bool>,
    pub auto_enrollment: Option<bool>,
    #[serde(default)]
    pub customer_ids: Vec<String>,
}

/// DTO for replacing an existing script.
///
/// Updates are full-field replacements, not patches: every scalar
/// field is overwritten and the customer assignment set is rewritten
/// to exactly `customer_ids`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScript {
    pub name: String,
    pub command: String,
    pub description: Option<String>,
    pub category: ScriptCategory,
    pub is_global: Option<bool>,
    pub auto_enrollment: Option<bool>,
    #[serde(default)]
    pub customer_ids: Vec<String>,
}
