//! Classification of store failures into the domain error taxonomy.
//!
//! Repositories never leak raw `sqlx::Error`: every store-originated
//! failure is re-classified here before it crosses the crate boundary.

use sqlx::error::ErrorKind;

use scriptdepot_core::error::CoreError;

/// Classify a sqlx error into a [`CoreError`].
///
/// - Unique and foreign-key violations map to `Conflict`.
/// - CHECK violations map to `Validation` (the category constraint is
///   the only CHECK in the schema).
/// - Pool acquire timeouts map to `Timeout`.
/// - Everything else maps to `Store` and is logged.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => CoreError::Conflict(db_err.message().to_string()),
            ErrorKind::ForeignKeyViolation => CoreError::Conflict(db_err.message().to_string()),
            ErrorKind::CheckViolation => CoreError::Validation(db_err.message().to_string()),
            _ => {
                tracing::error!(error = %db_err, "unclassified database error");
                CoreError::Store(db_err.message().to_string())
            }
        },
        sqlx::Error::PoolTimedOut => {
            CoreError::Timeout("timed out waiting for a store connection".to_string())
        }
        other => {
            tracing::error!(error = %other, "store error");
            CoreError::Store(other.to_string())
        }
    }
}
