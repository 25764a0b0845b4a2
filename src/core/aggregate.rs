use super::duration::WorkDuration;
use super::employee::EmployeeRecord;
use super::month::MonthRange;

/// Total time an employee worked over the months in `range`.
///
/// Empty or malformed cells add nothing. `None` when the total overflows.
pub fn total_worked(employee: &EmployeeRecord, range: &MonthRange) -> Option<WorkDuration> {
    range
        .resolve()
        .into_iter()
        .filter_map(|month| employee.duration(month).ok())
        .try_fold(WorkDuration::ZERO, WorkDuration::checked_add)
}

/// [`total_worked`] in whole minutes.
pub fn total_minutes(employee: &EmployeeRecord, range: &MonthRange) -> Option<u64> {
    total_worked(employee, range).map(|d| d.minutes())
}
