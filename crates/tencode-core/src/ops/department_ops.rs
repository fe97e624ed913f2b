use chrono::Utc;
use uuid::Uuid;

use super::store::Store;
use crate::errors::{CadError, Result};
use crate::model::{Department, Division};

/// Create a new department
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `label` - Human-readable label (must not be empty or whitespace-only)
/// * `callsign` - Optional callsign fragment for `{department}`
///
/// # Returns
/// The ID of the newly created department
///
/// # Errors
/// * `InvalidLabel` - If label is empty or contains only whitespace
pub fn create_department(
    store: &mut Store,
    label: String,
    callsign: Option<String>,
) -> Result<String> {
    if label.trim().is_empty() {
        return Err(CadError::InvalidLabel {
            reason: "Label cannot be empty or whitespace-only".to_string(),
        });
    }

    let department_id = Uuid::now_v7().to_string();
    let mut department = Department::new(department_id.clone(), label);
    department.callsign = callsign;

    tracing::debug!(department_id = %department_id, "created department");
    store.insert_department(department);

    Ok(department_id)
}

/// Create a new division under an existing department
///
/// # Errors
/// * `InvalidLabel` - If label is empty or contains only whitespace
/// * `DepartmentNotFound` / `DepartmentDeleted` - If the owning department
///   is missing or tombstoned
pub fn create_division(
    store: &mut Store,
    department_id: &str,
    label: String,
    callsign: Option<String>,
) -> Result<String> {
    if label.trim().is_empty() {
        return Err(CadError::InvalidLabel {
            reason: "Label cannot be empty or whitespace-only".to_string(),
        });
    }

    // The owning department must exist and be live
    store.get_department(department_id)?;

    let division_id = Uuid::now_v7().to_string();
    let mut division = Division::new(division_id.clone(), department_id.to_string(), label);
    division.callsign = callsign;

    tracing::debug!(division_id = %division_id, department_id = %department_id, "created division");
    store.insert_division(division);

    Ok(division_id)
}

/// Update a department's label and/or callsign fragment
///
/// Updates the `updated_at` timestamp. `callsign` replaces the stored value
/// outright when provided (Some(None) is expressed by passing
/// `Some(String::new())`, which the renderer treats as absent).
///
/// # Errors
/// * `DepartmentNotFound` / `DepartmentDeleted`
/// * `InvalidLabel` - If label is provided but blank
pub fn update_department(
    store: &mut Store,
    id: &str,
    label: Option<String>,
    callsign: Option<String>,
) -> Result<()> {
    if let Some(ref l) = label {
        if l.trim().is_empty() {
            return Err(CadError::InvalidLabel {
                reason: "Label cannot be empty or whitespace-only".to_string(),
            });
        }
    }

    let department = store.get_department_mut(id)?;

    if let Some(new_label) = label {
        department.label = new_label;
    }
    if let Some(new_callsign) = callsign {
        department.callsign = Some(new_callsign);
    }
    department.updated_at = Utc::now();

    Ok(())
}

/// Update a division's label and/or callsign fragment
///
/// # Errors
/// * `DivisionNotFound` / `DivisionDeleted`
/// * `InvalidLabel` - If label is provided but blank
pub fn update_division(
    store: &mut Store,
    id: &str,
    label: Option<String>,
    callsign: Option<String>,
) -> Result<()> {
    if let Some(ref l) = label {
        if l.trim().is_empty() {
            return Err(CadError::InvalidLabel {
                reason: "Label cannot be empty or whitespace-only".to_string(),
            });
        }
    }

    let division = store.get_division_mut(id)?;

    if let Some(new_label) = label {
        division.label = new_label;
    }
    if let Some(new_callsign) = callsign {
        division.callsign = Some(new_callsign);
    }
    division.updated_at = Utc::now();

    Ok(())
}

/// Delete a department (tombstone deletion)
///
/// Refused while any live unit or division still references the
/// department; reassign or delete those first.
///
/// # Errors
/// * `DepartmentNotFound` / `DepartmentDeleted`
/// * `DepartmentInUse` - If live units or divisions still reference it
pub fn delete_department(store: &mut Store, id: &str) -> Result<()> {
    store.get_department(id)?;

    let unit_refs = store
        .list_units()
        .iter()
        .filter(|u| u.department_id.as_deref() == Some(id))
        .count();
    let division_refs = store
        .list_divisions()
        .iter()
        .filter(|d| d.department_id == id)
        .count();

    let referent_count = unit_refs + division_refs;
    if referent_count > 0 {
        return Err(CadError::DepartmentInUse {
            department_id: id.to_string(),
            referent_count,
        });
    }

    let department = store.get_department_mut(id)?;
    department.deleted = true;
    department.updated_at = Utc::now();

    Ok(())
}

/// Delete a division (tombstone deletion)
///
/// Refused while any live unit still has the division assigned.
///
/// # Errors
/// * `DivisionNotFound` / `DivisionDeleted`
/// * `DivisionInUse` - If a live unit still references it
pub fn delete_division(store: &mut Store, id: &str) -> Result<()> {
    store.get_division(id)?;

    if let Some(unit) = store
        .list_units()
        .iter()
        .find(|u| u.division_ids.iter().any(|d| d == id))
    {
        return Err(CadError::DivisionInUse {
            division_id: id.to_string(),
            unit_id: unit.id.clone(),
        });
    }

    let division = store.get_division_mut(id)?;
    division.deleted = true;
    division.updated_at = Utc::now();

    Ok(())
}
