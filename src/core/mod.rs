pub mod aggregate;
pub mod allocate;
pub mod duration;
pub mod employee;
pub mod month;
pub mod roster;
pub mod table;

// Flat public surface for domain types and functions.
pub use aggregate::{total_minutes, total_worked};
pub use allocate::{allocate, round_to_currency, Allocation, AllocationError, Share, TipPool};
pub use duration::{parse_duration, DurationError, WorkDuration};
pub use employee::{CellError, EmployeeRecord, ZERO_CELL};
pub use month::{month_name, parse_month, MonthError, MonthRange, MONTH_NAMES};
pub use roster::{ImportMode, Roster, RosterError};
pub use table::{
    format_share, parse_share, read_employees, write_employees, CsvField, EmployeeRow, TableError,
};
