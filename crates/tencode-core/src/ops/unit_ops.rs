use chrono::Utc;
use uuid::Uuid;

use super::store::Store;
use crate::errors::{CadError, Result};
use crate::model::Unit;
use crate::reconcile::{diff_relations, reconcile, RelationDiff};
use crate::render::{generate_callsign, CallsignPieces};

/// Create a new unit
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `callsign` - Primary callsign number (must not be blank)
/// * `callsign2` - Secondary callsign number (must not be blank)
/// * `department_id` - Optional department the unit belongs to
/// * `division_ids` - Initial division assignments (deduplicated)
///
/// # Returns
/// The ID of the newly created unit
///
/// # Errors
/// * `InvalidCallsign` - If either callsign field is blank
/// * `DepartmentNotFound` / `DepartmentDeleted` - If the department is
///   missing or tombstoned
/// * `DivisionNotFound` / `DivisionDeleted` - If a division is missing or
///   tombstoned
pub fn create_unit(
    store: &mut Store,
    callsign: String,
    callsign2: String,
    department_id: Option<String>,
    division_ids: Vec<String>,
) -> Result<String> {
    if callsign.trim().is_empty() {
        return Err(CadError::InvalidCallsign {
            reason: "Callsign cannot be empty or whitespace-only".to_string(),
        });
    }
    if callsign2.trim().is_empty() {
        return Err(CadError::InvalidCallsign {
            reason: "Secondary callsign cannot be empty or whitespace-only".to_string(),
        });
    }

    if let Some(ref dep_id) = department_id {
        store.get_department(dep_id)?;
    }
    for division_id in &division_ids {
        store.get_division(division_id)?;
    }

    let unit_id = Uuid::now_v7().to_string();
    let mut unit = Unit::new(unit_id.clone(), callsign, callsign2);
    unit.department_id = department_id;
    for division_id in division_ids {
        unit.add_division_id(division_id);
    }

    tracing::debug!(unit_id = %unit_id, "created unit");
    store.insert_unit(unit);

    Ok(unit_id)
}

/// Read a unit by ID
///
/// # Errors
/// * `UnitNotFound` - If the unit doesn't exist
/// * `UnitDeleted` - If the unit was previously deleted
pub fn read_unit<'a>(store: &'a Store, id: &str) -> Result<&'a Unit> {
    store.get_unit(id)
}

/// Update a unit's callsign fields
///
/// Updates the `updated_at` timestamp. If both fields are None, this is a
/// no-op (but still updates the timestamp).
///
/// # Errors
/// * `UnitNotFound` / `UnitDeleted`
/// * `InvalidCallsign` - If a provided field is blank
pub fn update_unit(
    store: &mut Store,
    id: &str,
    callsign: Option<String>,
    callsign2: Option<String>,
) -> Result<()> {
    for value in [&callsign, &callsign2].into_iter().flatten() {
        if value.trim().is_empty() {
            return Err(CadError::InvalidCallsign {
                reason: "Callsign cannot be empty or whitespace-only".to_string(),
            });
        }
    }

    let unit = store.get_unit_mut(id)?;

    if let Some(new_callsign) = callsign {
        unit.callsign = new_callsign;
    }
    if let Some(new_callsign2) = callsign2 {
        unit.callsign2 = new_callsign2;
    }
    unit.updated_at = Utc::now();

    Ok(())
}

/// Move a unit to a different department (or clear it)
///
/// # Errors
/// * `UnitNotFound` / `UnitDeleted`
/// * `DepartmentNotFound` / `DepartmentDeleted` - If the target department
///   is missing or tombstoned
pub fn set_unit_department(
    store: &mut Store,
    id: &str,
    department_id: Option<String>,
) -> Result<()> {
    if let Some(ref dep_id) = department_id {
        store.get_department(dep_id)?;
    }

    let unit = store.get_unit_mut(id)?;
    unit.department_id = department_id;
    unit.updated_at = Utc::now();

    Ok(())
}

/// Reconcile a unit's division assignments against a desired set
///
/// Diffs the unit's current `division_ids` against `desired`, then applies
/// the resulting connect/disconnect operations in order. Identifiers
/// already assigned and still desired are untouched. Returns the diff so
/// callers can see what changed; an empty diff means the call was a no-op
/// (the timestamp is still bumped only when something changed).
///
/// # Errors
/// * `UnitNotFound` / `UnitDeleted`
/// * `DivisionNotFound` / `DivisionDeleted` - If a desired division is
///   missing or tombstoned
pub fn set_unit_divisions(store: &mut Store, id: &str, desired: Vec<String>) -> Result<RelationDiff> {
    // Desired divisions must exist and be live before anything is applied
    for division_id in &desired {
        store.get_division(division_id)?;
    }

    let unit = store.get_unit_mut(id)?;

    let diff = diff_relations(&unit.division_ids, &desired);
    if diff.is_noop() {
        return Ok(diff);
    }

    for op in reconcile(&unit.division_ids, &desired) {
        for rel in op.disconnect.iter().flatten() {
            unit.remove_division_id(&rel.id);
        }
        for rel in op.connect.iter().flatten() {
            unit.add_division_id(rel.id.clone());
        }
    }
    unit.updated_at = Utc::now();

    tracing::debug!(
        unit_id = %id,
        connected = diff.connect.len(),
        disconnected = diff.disconnect.len(),
        "reconciled unit divisions"
    );

    Ok(diff)
}

/// Delete a unit (tombstone deletion)
///
/// Sets the `deleted` flag to true. The unit remains in storage but is
/// filtered from queries.
///
/// # Errors
/// * `UnitNotFound` / `UnitDeleted`
pub fn delete_unit(store: &mut Store, id: &str) -> Result<()> {
    let unit = store.get_unit_mut(id)?;
    unit.deleted = true;
    unit.updated_at = Utc::now();

    Ok(())
}

/// Render a unit's display callsign from the configured template
///
/// Assembles the callsign pieces from the unit and its related entities:
/// `{department}` from the department's callsign fragment, `{callsign1}` /
/// `{callsign2}` from the unit's own fields, `{division}` from the unit's
/// first active division. An empty configured template yields an empty
/// display callsign.
///
/// # Errors
/// * `UnitNotFound` / `UnitDeleted`
///
/// Tombstoned related entities are skipped rather than reported; the
/// placeholder simply drops out.
pub fn display_callsign(store: &Store, id: &str) -> Result<String> {
    let unit = store.get_unit(id)?;

    let department = unit
        .department_id
        .as_deref()
        .and_then(|dep_id| store.get_department(dep_id).ok());
    let division = unit
        .division_ids
        .iter()
        .find_map(|div_id| store.get_division(div_id).ok());

    let pieces = CallsignPieces {
        department: department.and_then(|d| d.callsign_fragment()),
        callsign1: Some(unit.callsign.as_str()).filter(|c| !c.is_empty()),
        callsign2: Some(unit.callsign2.as_str()).filter(|c| !c.is_empty()),
        division: division.and_then(|d| d.callsign_fragment()),
    };

    Ok(generate_callsign(&pieces, &store.settings().callsign_template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::department_ops;

    #[test]
    fn test_create_unit_success() {
        let mut store = Store::new();
        let id = create_unit(&mut store, "12".to_string(), "A".to_string(), None, vec![]).unwrap();

        let unit = store.get_unit(&id).unwrap();
        assert_eq!(unit.callsign, "12");
        assert_eq!(unit.callsign2, "A");
        assert!(!unit.has_divisions());
    }

    #[test]
    fn test_create_unit_invalid_callsign() {
        let mut store = Store::new();
        let result = create_unit(&mut store, "".to_string(), "A".to_string(), None, vec![]);

        assert!(result.is_err());
        assert!(matches!(result, Err(CadError::InvalidCallsign { .. })));
    }

    #[test]
    fn test_create_unit_unknown_division() {
        let mut store = Store::new();
        let result = create_unit(
            &mut store,
            "12".to_string(),
            "A".to_string(),
            None,
            vec!["missing".to_string()],
        );

        assert!(matches!(result, Err(CadError::DivisionNotFound { .. })));
    }

    #[test]
    fn test_set_unit_divisions_applies_diff() {
        let mut store = Store::new();
        let dep_id = department_ops::create_department(&mut store, "Police".to_string(), None)
            .unwrap();
        let div_a =
            department_ops::create_division(&mut store, &dep_id, "Patrol".to_string(), None)
                .unwrap();
        let div_b =
            department_ops::create_division(&mut store, &dep_id, "Traffic".to_string(), None)
                .unwrap();
        let unit_id = create_unit(
            &mut store,
            "12".to_string(),
            "A".to_string(),
            Some(dep_id),
            vec![div_a.clone()],
        )
        .unwrap();

        let diff = set_unit_divisions(&mut store, &unit_id, vec![div_b.clone()]).unwrap();
        assert_eq!(diff.disconnect, vec![div_a]);
        assert_eq!(diff.connect, vec![div_b.clone()]);

        let unit = store.get_unit(&unit_id).unwrap();
        assert_eq!(unit.division_ids, vec![div_b]);
    }

    #[test]
    fn test_delete_unit_tombstones() {
        let mut store = Store::new();
        let id = create_unit(&mut store, "12".to_string(), "A".to_string(), None, vec![]).unwrap();

        delete_unit(&mut store, &id).unwrap();

        assert!(matches!(
            store.get_unit(&id),
            Err(CadError::UnitDeleted { .. })
        ));
        // Still present in raw storage
        assert!(store.get_unit_raw(&id).is_some());
    }
}
