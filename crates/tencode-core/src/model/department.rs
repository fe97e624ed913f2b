use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department - a top-level agency (police, fire/EMS, dispatch)
///
/// Departments own divisions and are referenced by units and records. The
/// optional `callsign` field is the fragment substituted for the
/// `{department}` placeholder when rendering a unit's display callsign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for this department (UUID v7)
    pub id: String,

    /// Human-readable label
    pub label: String,

    /// Callsign fragment substituted for `{department}` (None drops the segment)
    pub callsign: Option<String>,

    /// Timestamp when this department was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this department was last updated
    pub updated_at: DateTime<Utc>,

    /// Tombstone flag - if true, this department is considered deleted
    pub deleted: bool,
}

impl Department {
    /// Create a new Department with the given ID and label
    pub fn new(id: String, label: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            label,
            callsign: None,
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if this department is deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// The callsign fragment, if one is configured and non-empty
    pub fn callsign_fragment(&self) -> Option<&str> {
        self.callsign.as_deref().filter(|c| !c.is_empty())
    }
}
