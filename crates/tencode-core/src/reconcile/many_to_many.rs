use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Reference to a related entity by identifier
///
/// Serializes to the `{"id": ...}` shape relation-update APIs take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

impl RelationRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Classification of every identifier in `current ∪ desired`
///
/// Each id lands in exactly one bucket: `disconnect` (current − desired, in
/// current order), `connect` (desired − current, in desired order), or
/// `unchanged` (current ∩ desired, in current order). As sets,
/// `unchanged ∪ connect == desired` and `unchanged ∪ disconnect == current`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationDiff {
    /// Identifiers to connect (in desired order)
    pub connect: Vec<String>,
    /// Identifiers to disconnect (in current order)
    pub disconnect: Vec<String>,
    /// Identifiers present in both sets (in current order)
    pub unchanged: Vec<String>,
}

impl RelationDiff {
    /// True when current and desired already agree
    pub fn is_noop(&self) -> bool {
        self.connect.is_empty() && self.disconnect.is_empty()
    }
}

/// A single relation-update operation descriptor
///
/// Shaped for an ORM relation field: `{"connect": [{"id": ...}]}` or
/// `{"disconnect": [{"id": ...}]}`, with the unused side omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateOp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect: Option<Vec<RelationRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disconnect: Option<Vec<RelationRef>>,
}

impl UpdateOp {
    /// An operation connecting a single identifier
    pub fn connect_one(id: impl Into<String>) -> Self {
        Self {
            connect: Some(vec![RelationRef::new(id)]),
            disconnect: None,
        }
    }

    /// An operation disconnecting a single identifier
    pub fn disconnect_one(id: impl Into<String>) -> Self {
        Self {
            connect: None,
            disconnect: Some(vec![RelationRef::new(id)]),
        }
    }
}

/// Collapse duplicates to their first occurrence, preserving order
fn dedup_ids<'a, T, F>(items: &'a [T], key: &F) -> Vec<&'a str>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let id = key(item);
        if seen.insert(id) {
            out.push(id);
        }
    }
    out
}

/// Diff two relation sets of entities using a key accessor
///
/// `key` names the field holding the identifier, mirroring the accessor
/// option of ORM-side helpers. Inputs are treated as sets: duplicates are
/// collapsed to their first occurrence before diffing. Never fails;
/// identifiers are not checked for existence (that is the caller's
/// foreign-key constraint at write time).
pub fn diff_relations_by<T, F>(current: &[T], desired: &[T], key: F) -> RelationDiff
where
    F: Fn(&T) -> &str,
{
    let current_ids = dedup_ids(current, &key);
    let desired_ids = dedup_ids(desired, &key);

    let current_set: HashSet<&str> = current_ids.iter().copied().collect();
    let desired_set: HashSet<&str> = desired_ids.iter().copied().collect();

    let mut diff = RelationDiff::default();
    for id in &current_ids {
        if desired_set.contains(id) {
            diff.unchanged.push(id.to_string());
        } else {
            diff.disconnect.push(id.to_string());
        }
    }
    for id in &desired_ids {
        if !current_set.contains(id) {
            diff.connect.push(id.to_string());
        }
    }

    diff
}

/// Diff two relation sets of bare identifiers
pub fn diff_relations(current: &[String], desired: &[String]) -> RelationDiff {
    diff_relations_by(current, desired, |id| id.as_str())
}

/// Compute the update operations taking `current` to `desired`
///
/// Emits one operation per changed identifier: disconnects first (in
/// current order), then connects (in desired order), matching per-entity
/// sequential relation updates. Unchanged identifiers produce no
/// operation. An empty result means the sets already agree.
pub fn reconcile(current: &[String], desired: &[String]) -> Vec<UpdateOp> {
    let diff = diff_relations(current, desired);

    let mut ops = Vec::with_capacity(diff.disconnect.len() + diff.connect.len());
    for id in diff.disconnect {
        ops.push(UpdateOp::disconnect_one(id));
    }
    for id in diff.connect {
        ops.push(UpdateOp::connect_one(id));
    }
    ops
}
