use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit - a dispatchable unit (officer, deputy, EMS/FD unit)
///
/// A unit carries its own two callsign number fields (`callsign`,
/// `callsign2`) and references a department and zero or more divisions.
/// `division_ids` is the many-to-many relation maintained by the
/// reconciler: insertion-ordered and duplicate-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier for this unit (UUID v7)
    pub id: String,

    /// Primary callsign number, substituted for `{callsign1}`
    pub callsign: String,

    /// Secondary callsign number, substituted for `{callsign2}`
    pub callsign2: String,

    /// Optional department this unit belongs to
    pub department_id: Option<String>,

    /// Divisions assigned to this unit (insertion order, no duplicates)
    pub division_ids: Vec<String>,

    /// Timestamp when this unit was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this unit was last updated
    pub updated_at: DateTime<Utc>,

    /// Tombstone flag - if true, this unit is considered deleted
    pub deleted: bool,
}

impl Unit {
    /// Create a new Unit with the given ID and callsign fields
    pub fn new(id: String, callsign: String, callsign2: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            callsign,
            callsign2,
            department_id: None,
            division_ids: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if this unit is deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Check if this unit has any division assignments
    pub fn has_divisions(&self) -> bool {
        !self.division_ids.is_empty()
    }

    /// Add a division ID to this unit's assignment list
    pub fn add_division_id(&mut self, division_id: String) {
        if !self.division_ids.contains(&division_id) {
            self.division_ids.push(division_id);
        }
    }

    /// Remove a division ID from this unit's assignment list
    pub fn remove_division_id(&mut self, division_id: &str) {
        self.division_ids.retain(|id| id != division_id);
    }
}
