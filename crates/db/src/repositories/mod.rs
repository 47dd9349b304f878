//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. All store failures are
//! classified into [`scriptdepot_core::error::CoreError`] before they
//! leave this layer.

pub mod customer_repo;
pub mod script_repo;

pub use customer_repo::CustomerRepo;
pub use script_repo::ScriptRepo;
