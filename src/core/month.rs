use chrono::Month;
use std::fmt;

/// Canonical English month names, January first. Also the month column headers.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MonthError {
    #[error("month {0} is outside 1..=12")]
    OutOfRange(u32),
    #[error("unknown month '{0}'")]
    UnknownName(String),
}

/// Resolve a month argument to its index (January = 1).
///
/// Accepts a full English name, a three letter abbreviation (both
/// case-insensitive) or a number between 1 and 12.
pub fn parse_month(text: &str) -> Result<u32, MonthError> {
    let text = text.trim();
    if let Ok(n) = text.parse::<u32>() {
        return check_month(n);
    }
    text.parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| MonthError::UnknownName(text.to_string()))
}

/// Display name for a month index, e.g. `month_name(3) == "March"`.
pub fn month_name(month: u32) -> Result<&'static str, MonthError> {
    check_month(month).map(|m| MONTH_NAMES[(m - 1) as usize])
}

fn check_month(month: u32) -> Result<u32, MonthError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(MonthError::OutOfRange(month))
    }
}

/// Inclusive range of months, wrapping through December when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: u32,
    end: u32,
}

impl MonthRange {
    pub fn new(start: u32, end: u32) -> Result<Self, MonthError> {
        Ok(MonthRange {
            start: check_month(start)?,
            end: check_month(end)?,
        })
    }

    /// Build a range from two month arguments, see [`parse_month`].
    pub fn parse(start: &str, end: &str) -> Result<Self, MonthError> {
        MonthRange::new(parse_month(start)?, parse_month(end)?)
    }

    /// Every month of the year, January to December.
    pub fn full_year() -> Self {
        MonthRange { start: 1, end: 12 }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Month indices covered by the range, in calendar order from `start`.
    ///
    /// `resolve()` of October to February is `[10, 11, 12, 1, 2]`.
    pub fn resolve(&self) -> Vec<u32> {
        let len = (self.end + 12 - self.start) % 12 + 1;
        (0..len).map(|i| (self.start - 1 + i) % 12 + 1).collect()
    }

    pub fn contains(&self, month: u32) -> bool {
        self.resolve().contains(&month)
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = MONTH_NAMES[(self.start - 1) as usize];
        let end = MONTH_NAMES[(self.end - 1) as usize];
        if self.start == self.end {
            write!(f, "{}", start)
        } else {
            write!(f, "{} - {}", start, end)
        }
    }
}
