use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `<hours>h <minutes>m`, case-insensitive. The minutes field may be empty.
static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[hH](?-u:\s)([0-9]{0,2})[mM]$").expect("valid duration regex"));

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration '{0}', expected e.g. '12h 30m'")]
    Format(String),
    #[error("duration '{0}' is too large")]
    Overflow(String),
}

/// Time worked in a month, held as whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkDuration(u64);

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration(0);

    pub fn from_minutes(minutes: u64) -> Self {
        WorkDuration(minutes)
    }

    pub fn from_hm(hours: u64, minutes: u64) -> Option<Self> {
        hours
            .checked_mul(60)
            .and_then(|m| m.checked_add(minutes))
            .map(WorkDuration)
    }

    pub fn minutes(&self) -> u64 {
        self.0
    }

    /// `None` when the sum no longer fits in a `u64` of minutes.
    pub fn checked_add(self, rhs: WorkDuration) -> Option<WorkDuration> {
        self.0.checked_add(rhs.0).map(WorkDuration)
    }

    /// Parse a month cell. See [`parse_duration`].
    pub fn parse(text: &str) -> Result<Self, DurationError> {
        parse_duration(text)
    }

    /// Lenient read used during aggregation: empty or malformed cells count as zero.
    pub fn parse_or_zero(text: &str) -> Self {
        if text.trim().is_empty() {
            return WorkDuration::ZERO;
        }
        match parse_duration(text) {
            Ok(d) => d,
            Err(err) => {
                log::debug!("treating cell as zero: {}", err);
                WorkDuration::ZERO
            }
        }
    }
}

/// Canonical form, minutes zero padded: `128h 05m`.
impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for WorkDuration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

/// Parse `"<hours>h <minutes>m"` into a duration of `hours * 60 + minutes` minutes.
///
/// Hours are unbounded. The minutes field holds up to two digits and is not
/// checked against 60, so `"1h 75m"` is 135 minutes.
pub fn parse_duration(text: &str) -> Result<WorkDuration, DurationError> {
    let caps = DURATION_PATTERN
        .captures(text)
        .ok_or_else(|| DurationError::Format(text.to_string()))?;

    let hours: u64 = caps[1]
        .parse()
        .map_err(|_| DurationError::Overflow(text.to_string()))?;
    let minutes: u64 = match &caps[2] {
        "" => 0,
        m => m
            .parse()
            .map_err(|_| DurationError::Format(text.to_string()))?,
    };

    WorkDuration::from_hm(hours, minutes).ok_or_else(|| DurationError::Overflow(text.to_string()))
}
