//! Domain layer for the script administration core.
//!
//! Pure types shared by the persistence layer and any outer surface:
//! the error taxonomy, common type aliases, and the closed script
//! category enumeration. This crate has no internal dependencies and
//! performs no I/O.

pub mod category;
pub mod error;
pub mod types;
