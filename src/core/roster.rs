use super::allocate::{allocate, Allocation, AllocationError, TipPool};
use super::duration::WorkDuration;
use super::employee::{CellError, EmployeeRecord};
use super::month::MonthRange;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error("no employee named '{0}'")]
    UnknownEmployee(String),
    #[error("cannot set {month} for '{name}': {source}")]
    InvalidCell {
        name: String,
        month: u32,
        source: CellError,
    },
}

/// How imported rows combine with the employees already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Drop the current employees first.
    #[default]
    Replace,
    /// Add the imported employees after the current ones.
    Append,
}

/// The employees being worked on, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<EmployeeRecord>,
}

impl Roster {
    pub fn new(employees: Vec<EmployeeRecord>) -> Self {
        Roster { employees }
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn into_employees(self) -> Vec<EmployeeRecord> {
        self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Add an employee with no hours. Duplicate names are allowed.
    pub fn add_employee(&mut self, name: &str) -> Result<&EmployeeRecord, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        self.employees.push(EmployeeRecord::new(name));
        log::info!("Added employee '{}'", name);
        Ok(&self.employees[self.employees.len() - 1])
    }

    /// Remove every employee called `name` (surrounding whitespace ignored), returning how many were removed.
    pub fn remove_employee(&mut self, name: &str) -> Result<usize, RosterError> {
        let name = name.trim();
        let before = self.employees.len();
        self.employees.retain(|e| e.name != name);
        match before - self.employees.len() {
            0 => Err(RosterError::UnknownEmployee(name.to_string())),
            removed => Ok(removed),
        }
    }

    /// Validated edit of one month for the first employee called `name`.
    ///
    /// A rejected edit leaves the roster unchanged.
    pub fn set_duration(
        &mut self,
        name: &str,
        month: u32,
        text: &str,
    ) -> Result<WorkDuration, RosterError> {
        let name = name.trim();
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| RosterError::UnknownEmployee(name.to_string()))?;
        employee
            .set_duration(month, text)
            .map_err(|source| RosterError::InvalidCell {
                name: name.to_string(),
                month,
                source,
            })
    }

    pub fn import(&mut self, employees: Vec<EmployeeRecord>, mode: ImportMode) {
        log::info!("Importing {} employees ({:?})", employees.len(), mode);
        if mode == ImportMode::Replace {
            self.employees.clear();
        }
        self.employees.extend(employees);
    }

    /// Allocate `pool` over `range` and write every employee's share.
    ///
    /// The allocation runs on a copy of the current employees. Shares are
    /// written only if it succeeds, otherwise the previous shares remain.
    pub fn calculate(
        &mut self,
        range: &MonthRange,
        pool: &TipPool,
    ) -> Result<Allocation, AllocationError> {
        let snapshot = self.employees.clone();
        let allocation = allocate(&snapshot, range, pool)?;
        for (employee, share) in self.employees.iter_mut().zip(&allocation.shares) {
            employee.share = Some(share.amount);
        }
        Ok(allocation)
    }
}
