//! Referential-integrity rules over the store
//!
//! `invariants` holds the pure `find_*` scans that report every violation;
//! `validation` wraps them into a single pass/fail check.

pub mod invariants;
pub mod validation;

pub use validation::validate_store;
