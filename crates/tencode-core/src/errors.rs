use thiserror::Error;

/// Result type alias using CadError
pub type Result<T> = std::result::Result<T, CadError>;

/// Comprehensive error taxonomy for tencode operations
///
/// Rendering and reconciliation never fail; every variant here belongs to
/// the store, operations, or validation surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CadError {
    // ===== Lookup Errors =====
    /// Department not found in store
    #[error("Department not found: {department_id}")]
    DepartmentNotFound { department_id: String },

    /// Department was previously deleted (tombstoned)
    #[error("Department was deleted: {department_id}")]
    DepartmentDeleted { department_id: String },

    /// Division not found in store
    #[error("Division not found: {division_id}")]
    DivisionNotFound { division_id: String },

    /// Division was previously deleted (tombstoned)
    #[error("Division was deleted: {division_id}")]
    DivisionDeleted { division_id: String },

    /// Unit not found in store
    #[error("Unit not found: {unit_id}")]
    UnitNotFound { unit_id: String },

    /// Unit was previously deleted (tombstoned)
    #[error("Unit was deleted: {unit_id}")]
    UnitDeleted { unit_id: String },

    /// Record not found in store
    #[error("Record not found: {record_id}")]
    RecordNotFound { record_id: String },

    /// Record was previously deleted (tombstoned)
    #[error("Record was deleted: {record_id}")]
    RecordDeleted { record_id: String },

    // ===== Validation Errors =====
    /// Invalid callsign (empty or whitespace-only)
    #[error("Invalid callsign: {reason}")]
    InvalidCallsign { reason: String },

    /// Invalid label (empty or whitespace-only)
    #[error("Invalid label: {reason}")]
    InvalidLabel { reason: String },

    /// Entity already exists (duplicate ID)
    #[error("Entity already exists: {entity_id}")]
    AlreadyExists { entity_id: String },

    // ===== Referential Integrity Errors =====
    /// Unit references a department that doesn't exist
    #[error("Unit {unit_id} references unknown department: {department_id}")]
    UnitReferencesUnknownDepartment {
        unit_id: String,
        department_id: String,
    },

    /// Unit references a division that doesn't exist
    #[error("Unit {unit_id} references unknown division: {division_id}")]
    UnitReferencesUnknownDivision { unit_id: String, division_id: String },

    /// Unit references a tombstoned division
    #[error("Unit {unit_id} references deleted division: {division_id}")]
    UnitReferencesDeletedDivision { unit_id: String, division_id: String },

    /// Division references a department that doesn't exist
    #[error("Division {division_id} references unknown department: {department_id}")]
    DivisionReferencesUnknownDepartment {
        division_id: String,
        department_id: String,
    },

    /// Record references a department that doesn't exist
    #[error("Record {record_id} references unknown department: {department_id}")]
    RecordReferencesUnknownDepartment {
        record_id: String,
        department_id: String,
    },

    /// Unit lists the same division more than once
    #[error("Unit {unit_id} has duplicate division assignment: {division_id}")]
    DuplicateDivisionAssignment { unit_id: String, division_id: String },

    // ===== Mutation Errors =====
    /// Cannot delete department that still has live units or divisions
    #[error("Cannot delete department {department_id}: {referent_count} live units/divisions reference it")]
    DepartmentInUse {
        department_id: String,
        referent_count: usize,
    },

    /// Cannot delete division still assigned to a live unit
    #[error("Cannot delete division {division_id}: unit {unit_id} still references it")]
    DivisionInUse { division_id: String, unit_id: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from serde_json::Error to CadError
impl From<serde_json::Error> for CadError {
    fn from(err: serde_json::Error) -> Self {
        CadError::Serialization {
            message: err.to_string(),
        }
    }
}
