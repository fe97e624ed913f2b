use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Division - a subdivision of a department (patrol, traffic, SWAT)
///
/// Divisions are assigned to units through a many-to-many relation held on
/// the unit side (`Unit::division_ids`). The optional `callsign` field is
/// the fragment substituted for the `{division}` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    /// Unique identifier for this division (UUID v7)
    pub id: String,

    /// ID of the department this division belongs to
    pub department_id: String,

    /// Human-readable label
    pub label: String,

    /// Callsign fragment substituted for `{division}` (None drops the segment)
    pub callsign: Option<String>,

    /// Timestamp when this division was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this division was last updated
    pub updated_at: DateTime<Utc>,

    /// Tombstone flag - if true, this division is considered deleted
    pub deleted: bool,
}

impl Division {
    /// Create a new Division with the given ID, owning department, and label
    pub fn new(id: String, department_id: String, label: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            department_id,
            label,
            callsign: None,
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if this division is deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// The callsign fragment, if one is configured and non-empty
    pub fn callsign_fragment(&self) -> Option<&str> {
        self.callsign.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_division() {
        let division = Division::new(
            "div-1".to_string(),
            "dep-1".to_string(),
            "Patrol".to_string(),
        );

        assert_eq!(division.id, "div-1");
        assert_eq!(division.department_id, "dep-1");
        assert_eq!(division.label, "Patrol");
        assert!(!division.is_deleted());
        assert!(division.callsign_fragment().is_none());
    }
}
