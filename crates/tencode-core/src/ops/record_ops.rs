use chrono::Utc;
use uuid::Uuid;

use super::store::Store;
use crate::errors::Result;
use crate::model::Record;
use crate::render::format_case_number;

/// Create a new record
///
/// Allocates the next case number and freezes its rendered display form
/// using the configured case-number template. When no template is
/// configured (empty string), the display falls back to the bare decimal
/// number.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `department_id` - Optional department the record is filed under
/// * `notes` - Free-form notes
///
/// # Returns
/// The ID of the newly created record
///
/// # Errors
/// * `DepartmentNotFound` / `DepartmentDeleted` - If the department is
///   missing or tombstoned
pub fn create_record(
    store: &mut Store,
    department_id: Option<String>,
    notes: String,
) -> Result<String> {
    let department_fragment = match department_id.as_deref() {
        Some(dep_id) => store
            .get_department(dep_id)?
            .callsign_fragment()
            .map(str::to_string),
        None => None,
    };

    let case_number = store.allocate_case_number();
    let record_id = Uuid::now_v7().to_string();

    let mut record = Record::new(record_id.clone(), case_number);
    record.department_id = department_id;
    record.notes = notes;

    let template = &store.settings().case_number_template;
    if !template.is_empty() {
        record.case_number_display = format_case_number(
            case_number,
            department_fragment.as_deref(),
            record.created_at,
            template,
        );
    }

    tracing::debug!(record_id = %record_id, case_number, "created record");
    store.insert_record(record);

    Ok(record_id)
}

/// Read a record by ID
///
/// # Errors
/// * `RecordNotFound` - If the record doesn't exist
/// * `RecordDeleted` - If the record was previously deleted
pub fn read_record<'a>(store: &'a Store, id: &str) -> Result<&'a Record> {
    store.get_record(id)
}

/// Update a record's notes
///
/// The case number and its display form are frozen at creation and cannot
/// be changed here.
///
/// # Errors
/// * `RecordNotFound` / `RecordDeleted`
pub fn update_record(store: &mut Store, id: &str, notes: String) -> Result<()> {
    let record = store.get_record_mut(id)?;
    record.notes = notes;
    record.updated_at = Utc::now();

    Ok(())
}

/// Delete a record (tombstone deletion)
///
/// The record remains in storage (and its case number stays consumed) but
/// is filtered from queries.
///
/// # Errors
/// * `RecordNotFound` / `RecordDeleted`
pub fn delete_record(store: &mut Store, id: &str) -> Result<()> {
    let record = store.get_record_mut(id)?;
    record.deleted = true;
    record.updated_at = Utc::now();

    Ok(())
}
