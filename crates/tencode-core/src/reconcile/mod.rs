//! Many-to-many relation reconciliation
//!
//! Computes the connect/disconnect delta between a stored relation set and
//! a desired target set, and emits update-operation descriptors shaped for
//! sequential application against an ORM relation field. Atomic application
//! (wrapping the operations in a transaction) is the caller's job.

pub mod many_to_many;

pub use many_to_many::{
    diff_relations, diff_relations_by, reconcile, RelationDiff, RelationRef, UpdateOp,
};
