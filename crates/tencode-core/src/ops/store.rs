use std::collections::HashMap;

use crate::errors::{CadError, Result};
use crate::model::{CadSettings, Department, Division, Record, Unit};

/// In-memory store for departments, divisions, units, and records
///
/// A simple HashMap-based storage implementation. Not thread-safe (no
/// Arc/RwLock) - designed for single-threaded use. All storage access is
/// encapsulated here; durability and transaction isolation belong to an
/// external persistence layer.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Map of department ID to Department
    pub(crate) departments: HashMap<String, Department>,
    /// Map of division ID to Division
    pub(crate) divisions: HashMap<String, Division>,
    /// Map of unit ID to Unit
    pub(crate) units: HashMap<String, Unit>,
    /// Map of record ID to Record
    pub(crate) records: HashMap<String, Record>,
    /// Admin-configured templates
    settings: CadSettings,
    /// Last allocated case number (0 = none allocated yet)
    last_case_number: u64,
}

impl Store {
    /// Create a new empty Store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the admin-configured settings
    pub fn settings(&self) -> &CadSettings {
        &self.settings
    }

    /// Replace the admin-configured settings
    pub fn set_settings(&mut self, settings: CadSettings) {
        self.settings = settings;
    }

    /// Allocate the next case number
    ///
    /// Starts at 1 and never reuses a number, even for deleted records.
    pub fn allocate_case_number(&mut self) -> u64 {
        self.last_case_number += 1;
        self.last_case_number
    }

    /// Get a Department by ID
    ///
    /// # Errors
    ///
    /// Returns `DepartmentNotFound` if the department doesn't exist, or
    /// `DepartmentDeleted` if it was tombstoned.
    pub fn get_department(&self, id: &str) -> Result<&Department> {
        let department =
            self.departments
                .get(id)
                .ok_or_else(|| CadError::DepartmentNotFound {
                    department_id: id.to_string(),
                })?;

        if department.deleted {
            return Err(CadError::DepartmentDeleted {
                department_id: id.to_string(),
            });
        }

        Ok(department)
    }

    /// Get a mutable reference to a Department by ID
    ///
    /// # Errors
    ///
    /// Returns `DepartmentNotFound` if the department doesn't exist, or
    /// `DepartmentDeleted` if it was tombstoned.
    pub fn get_department_mut(&mut self, id: &str) -> Result<&mut Department> {
        let department =
            self.departments
                .get_mut(id)
                .ok_or_else(|| CadError::DepartmentNotFound {
                    department_id: id.to_string(),
                })?;

        if department.deleted {
            return Err(CadError::DepartmentDeleted {
                department_id: id.to_string(),
            });
        }

        Ok(department)
    }

    /// Get a Division by ID
    ///
    /// # Errors
    ///
    /// Returns `DivisionNotFound` if the division doesn't exist, or
    /// `DivisionDeleted` if it was tombstoned.
    pub fn get_division(&self, id: &str) -> Result<&Division> {
        let division = self
            .divisions
            .get(id)
            .ok_or_else(|| CadError::DivisionNotFound {
                division_id: id.to_string(),
            })?;

        if division.deleted {
            return Err(CadError::DivisionDeleted {
                division_id: id.to_string(),
            });
        }

        Ok(division)
    }

    /// Get a mutable reference to a Division by ID
    ///
    /// # Errors
    ///
    /// Returns `DivisionNotFound` if the division doesn't exist, or
    /// `DivisionDeleted` if it was tombstoned.
    pub fn get_division_mut(&mut self, id: &str) -> Result<&mut Division> {
        let division = self
            .divisions
            .get_mut(id)
            .ok_or_else(|| CadError::DivisionNotFound {
                division_id: id.to_string(),
            })?;

        if division.deleted {
            return Err(CadError::DivisionDeleted {
                division_id: id.to_string(),
            });
        }

        Ok(division)
    }

    /// Get a Unit by ID
    ///
    /// # Errors
    ///
    /// Returns `UnitNotFound` if the unit doesn't exist, or `UnitDeleted`
    /// if it was tombstoned.
    pub fn get_unit(&self, id: &str) -> Result<&Unit> {
        let unit = self.units.get(id).ok_or_else(|| CadError::UnitNotFound {
            unit_id: id.to_string(),
        })?;

        if unit.deleted {
            return Err(CadError::UnitDeleted {
                unit_id: id.to_string(),
            });
        }

        Ok(unit)
    }

    /// Get a mutable reference to a Unit by ID
    ///
    /// # Errors
    ///
    /// Returns `UnitNotFound` if the unit doesn't exist, or `UnitDeleted`
    /// if it was tombstoned.
    pub fn get_unit_mut(&mut self, id: &str) -> Result<&mut Unit> {
        let unit = self
            .units
            .get_mut(id)
            .ok_or_else(|| CadError::UnitNotFound {
                unit_id: id.to_string(),
            })?;

        if unit.deleted {
            return Err(CadError::UnitDeleted {
                unit_id: id.to_string(),
            });
        }

        Ok(unit)
    }

    /// Get a Record by ID
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the record doesn't exist, or
    /// `RecordDeleted` if it was tombstoned.
    pub fn get_record(&self, id: &str) -> Result<&Record> {
        let record = self
            .records
            .get(id)
            .ok_or_else(|| CadError::RecordNotFound {
                record_id: id.to_string(),
            })?;

        if record.deleted {
            return Err(CadError::RecordDeleted {
                record_id: id.to_string(),
            });
        }

        Ok(record)
    }

    /// Get a mutable reference to a Record by ID
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the record doesn't exist, or
    /// `RecordDeleted` if it was tombstoned.
    pub fn get_record_mut(&mut self, id: &str) -> Result<&mut Record> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| CadError::RecordNotFound {
                record_id: id.to_string(),
            })?;

        if record.deleted {
            return Err(CadError::RecordDeleted {
                record_id: id.to_string(),
            });
        }

        Ok(record)
    }

    /// List all non-deleted departments
    pub fn list_departments(&self) -> Vec<&Department> {
        self.departments.values().filter(|d| !d.deleted).collect()
    }

    /// List all non-deleted divisions
    pub fn list_divisions(&self) -> Vec<&Division> {
        self.divisions.values().filter(|d| !d.deleted).collect()
    }

    /// List all non-deleted units
    pub fn list_units(&self) -> Vec<&Unit> {
        self.units.values().filter(|u| !u.deleted).collect()
    }

    /// List all non-deleted records
    pub fn list_records(&self) -> Vec<&Record> {
        self.records.values().filter(|r| !r.deleted).collect()
    }

    /// Insert a Department into the store
    pub fn insert_department(&mut self, department: Department) {
        self.departments.insert(department.id.clone(), department);
    }

    /// Insert a Division into the store
    pub fn insert_division(&mut self, division: Division) {
        self.divisions.insert(division.id.clone(), division);
    }

    /// Insert a Unit into the store
    pub fn insert_unit(&mut self, unit: Unit) {
        self.units.insert(unit.id.clone(), unit);
    }

    /// Insert a Record into the store
    pub fn insert_record(&mut self, record: Record) {
        self.records.insert(record.id.clone(), record);
    }

    /// Get a Unit from storage, bypassing the deleted check
    ///
    /// Useful for testing tombstone behavior. Returns None if the unit
    /// doesn't exist, Some(unit) if it exists (even if deleted).
    pub fn get_unit_raw(&self, id: &str) -> Option<&Unit> {
        self.units.get(id)
    }

    /// Get a Record from storage, bypassing the deleted check
    pub fn get_record_raw(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }
}
