use super::duration::{DurationError, WorkDuration};
use super::month::{MonthError, MONTH_NAMES};
use rust_decimal::Decimal;

/// Text shown in a month cell for a newly added employee.
pub const ZERO_CELL: &str = "0h 00m";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CellError {
    #[error(transparent)]
    Month(#[from] MonthError),
    #[error(transparent)]
    Duration(#[from] DurationError),
}

/// One employee row: a name, the hours worked in each month, and the tip share
/// from the last allocation.
///
/// Month cells are kept as entered so a table can be read and written back
/// unchanged. Cells that don't parse count as zero when hours are totalled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub name: String,
    cells: [String; 12],
    pub share: Option<Decimal>,
}

impl EmployeeRecord {
    /// A new employee with zero hours in every month and a zero share.
    pub fn new(name: impl Into<String>) -> Self {
        EmployeeRecord {
            name: name.into(),
            cells: std::array::from_fn(|_| ZERO_CELL.to_string()),
            share: Some(Decimal::ZERO),
        }
    }

    /// Build a record from raw month cells, e.g. from an imported row.
    pub fn from_cells(name: impl Into<String>, cells: [String; 12], share: Option<Decimal>) -> Self {
        EmployeeRecord {
            name: name.into(),
            cells,
            share,
        }
    }

    pub fn cells(&self) -> &[String; 12] {
        &self.cells
    }

    /// Raw text of a month cell (January = 1).
    pub fn cell(&self, month: u32) -> Result<&str, MonthError> {
        month_slot(month).map(|i| self.cells[i].as_str())
    }

    /// Hours worked in a month. Empty or malformed cells are zero.
    pub fn duration(&self, month: u32) -> Result<WorkDuration, MonthError> {
        self.cell(month).map(WorkDuration::parse_or_zero)
    }

    /// Replace a month cell after validating the new text.
    ///
    /// On error the existing value is left as it was.
    pub fn set_duration(&mut self, month: u32, text: &str) -> Result<WorkDuration, CellError> {
        let slot = month_slot(month)?;
        let duration = WorkDuration::parse(text)?;
        self.cells[slot] = text.to_string();
        Ok(duration)
    }

    /// Months whose cell holds text that is neither empty nor a valid duration.
    pub fn malformed_cells(&self) -> Vec<(u32, &str)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty() && WorkDuration::parse(text).is_err())
            .map(|(i, text)| (i as u32 + 1, text.as_str()))
            .collect()
    }
}

fn month_slot(month: u32) -> Result<usize, MonthError> {
    if (1..=MONTH_NAMES.len() as u32).contains(&month) {
        Ok(month as usize - 1)
    } else {
        Err(MonthError::OutOfRange(month))
    }
}
