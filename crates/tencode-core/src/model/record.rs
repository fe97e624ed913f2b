use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record - a case record (arrest report, written warning, ticket)
///
/// `case_number` is allocated monotonically by the store at creation time.
/// `case_number_display` is the template-rendered form, frozen when the
/// record is created so later template changes don't rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier for this record (UUID v7)
    pub id: String,

    /// Monotonic case number, never reused
    pub case_number: u64,

    /// Rendered case number as shown to dispatchers
    pub case_number_display: String,

    /// Optional department this record was filed under
    pub department_id: Option<String>,

    /// Free-form notes
    pub notes: String,

    /// Timestamp when this record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this record was last updated
    pub updated_at: DateTime<Utc>,

    /// Tombstone flag - if true, this record is considered deleted
    pub deleted: bool,
}

impl Record {
    /// Create a new Record with the given ID and case number
    ///
    /// The display form defaults to the bare decimal number; callers that
    /// have a configured template overwrite it before insertion.
    pub fn new(id: String, case_number: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            case_number,
            case_number_display: case_number.to_string(),
            department_id: None,
            notes: String::new(),
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if this record is deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
