use std::collections::HashSet;

use crate::ops::Store;

/// Find live units referencing a department that is missing from storage
///
/// Returns (unit_id, department_id) pairs. Tombstoned departments are not
/// reported here; see [`find_units_with_deleted_division`] for the
/// deleted-referent shape.
pub fn find_units_with_unknown_department(store: &Store) -> Vec<(String, String)> {
    store
        .list_units()
        .iter()
        .filter_map(|unit| {
            let dep_id = unit.department_id.as_deref()?;
            if store.departments.contains_key(dep_id) {
                None
            } else {
                Some((unit.id.clone(), dep_id.to_string()))
            }
        })
        .collect()
}

/// Find live units referencing a division that is missing from storage
///
/// Returns (unit_id, division_id) pairs.
pub fn find_units_with_unknown_division(store: &Store) -> Vec<(String, String)> {
    let mut violations = Vec::new();
    for unit in store.list_units() {
        for division_id in &unit.division_ids {
            if !store.divisions.contains_key(division_id) {
                violations.push((unit.id.clone(), division_id.clone()));
            }
        }
    }
    violations
}

/// Find live units referencing a tombstoned division
///
/// Returns (unit_id, division_id) pairs.
pub fn find_units_with_deleted_division(store: &Store) -> Vec<(String, String)> {
    let mut violations = Vec::new();
    for unit in store.list_units() {
        for division_id in &unit.division_ids {
            if store
                .divisions
                .get(division_id)
                .is_some_and(|d| d.deleted)
            {
                violations.push((unit.id.clone(), division_id.clone()));
            }
        }
    }
    violations
}

/// Find live divisions referencing a department that is missing from storage
///
/// Returns (division_id, department_id) pairs.
pub fn find_divisions_with_unknown_department(store: &Store) -> Vec<(String, String)> {
    store
        .list_divisions()
        .iter()
        .filter(|division| !store.departments.contains_key(&division.department_id))
        .map(|division| (division.id.clone(), division.department_id.clone()))
        .collect()
}

/// Find live records referencing a department that is missing from storage
///
/// Returns (record_id, department_id) pairs.
pub fn find_records_with_unknown_department(store: &Store) -> Vec<(String, String)> {
    store
        .list_records()
        .iter()
        .filter_map(|record| {
            let dep_id = record.department_id.as_deref()?;
            if store.departments.contains_key(dep_id) {
                None
            } else {
                Some((record.id.clone(), dep_id.to_string()))
            }
        })
        .collect()
}

/// Find live units listing the same division more than once
///
/// Returns (unit_id, division_id) pairs, one per duplicated id.
pub fn find_duplicate_division_assignments(store: &Store) -> Vec<(String, String)> {
    let mut violations = Vec::new();
    for unit in store.list_units() {
        let mut seen = HashSet::new();
        for division_id in &unit.division_ids {
            if !seen.insert(division_id.as_str()) {
                violations.push((unit.id.clone(), division_id.clone()));
            }
        }
    }
    violations
}
