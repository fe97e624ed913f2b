use crate::errors::{CadError, Result};
use crate::ops::Store;

use super::invariants;

/// Validate referential integrity across the entire store
///
/// Runs all invariant scans and returns an error if any violations are
/// found:
///
/// 1. Units reference existing departments
/// 2. Units reference existing, live divisions, each at most once
/// 3. Divisions reference existing departments
/// 4. Records reference existing departments
///
/// Tombstoned entities are filtered from the scanned side but still count
/// as missing referents when something live points at them.
///
/// # Errors
/// Returns the first validation error encountered. For exhaustive error
/// reporting, call the individual invariant functions directly.
pub fn validate_store(store: &Store) -> Result<()> {
    let unknown_departments = invariants::find_units_with_unknown_department(store);
    if let Some((unit_id, department_id)) = unknown_departments.first() {
        return Err(CadError::UnitReferencesUnknownDepartment {
            unit_id: unit_id.clone(),
            department_id: department_id.clone(),
        });
    }

    let unknown_divisions = invariants::find_units_with_unknown_division(store);
    if let Some((unit_id, division_id)) = unknown_divisions.first() {
        return Err(CadError::UnitReferencesUnknownDivision {
            unit_id: unit_id.clone(),
            division_id: division_id.clone(),
        });
    }

    let deleted_divisions = invariants::find_units_with_deleted_division(store);
    if let Some((unit_id, division_id)) = deleted_divisions.first() {
        return Err(CadError::UnitReferencesDeletedDivision {
            unit_id: unit_id.clone(),
            division_id: division_id.clone(),
        });
    }

    let duplicate_assignments = invariants::find_duplicate_division_assignments(store);
    if let Some((unit_id, division_id)) = duplicate_assignments.first() {
        return Err(CadError::DuplicateDivisionAssignment {
            unit_id: unit_id.clone(),
            division_id: division_id.clone(),
        });
    }

    let orphan_divisions = invariants::find_divisions_with_unknown_department(store);
    if let Some((division_id, department_id)) = orphan_divisions.first() {
        return Err(CadError::DivisionReferencesUnknownDepartment {
            division_id: division_id.clone(),
            department_id: department_id.clone(),
        });
    }

    let orphan_records = invariants::find_records_with_unknown_department(store);
    if let Some((record_id, department_id)) = orphan_records.first() {
        return Err(CadError::RecordReferencesUnknownDepartment {
            record_id: record_id.clone(),
            department_id: department_id.clone(),
        });
    }

    Ok(())
}
