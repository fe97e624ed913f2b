//! Tencode Core - dispatch/records domain kernel
//!
//! This crate provides the foundational data structures and operations for a
//! computer-aided dispatch records system, including:
//! - Department, Division, Unit, and Record models with full CRUD semantics
//! - Callsign and case-number template rendering from admin-configured
//!   template strings
//! - Many-to-many relation reconciliation (connect/disconnect deltas)
//! - Referential-integrity validation over the store
//!
//! The template renderer and the relation reconciler are pure functions with
//! no I/O and no failure modes of their own; the store and operations layer
//! around them carries the fallible surfaces.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod reconcile;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use errors::{CadError, Result};
pub use model::{CadSettings, Department, Division, Record, Unit};
pub use ops::Store;
pub use reconcile::{diff_relations, reconcile, RelationDiff, UpdateOp};
pub use render::{generate_callsign, render_template, CallsignPieces, Replacements};
