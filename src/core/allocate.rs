use super::aggregate::total_worked;
use super::duration::WorkDuration;
use super::employee::EmployeeRecord;
use super::month::MonthRange;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("no hours recorded in {range}")]
    NoHoursInRange { range: String },
    #[error("tip pool cannot be negative: {0}")]
    NegativePool(Decimal),
    #[error("tip pool of {pool} is too large to divide")]
    Overflow { pool: Decimal },
    #[error("hours recorded in {range} are too large to total")]
    HoursOverflow { range: String },
}

/// Total tips to hand out for a range of months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipPool(Decimal);

impl TipPool {
    pub fn new(amount: Decimal) -> Result<Self, AllocationError> {
        if amount < Decimal::ZERO {
            return Err(AllocationError::NegativePool(amount));
        }
        Ok(TipPool(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

/// One employee's cut of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Share {
    pub name: String,
    #[serde(serialize_with = "serialize_worked")]
    pub worked: WorkDuration,
    pub hours: Decimal,
    pub amount: Decimal,
}

fn serialize_worked<S: serde::Serializer>(d: &WorkDuration, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(d)
}

/// Result of splitting a pool, shares in the same order as the employees given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    #[serde(serialize_with = "serialize_range")]
    pub range: MonthRange,
    pub pool: Decimal,
    pub total_hours: Decimal,
    /// Tips per hour worked, unrounded.
    pub ratio: Decimal,
    pub shares: Vec<Share>,
}

fn serialize_range<S: serde::Serializer>(r: &MonthRange, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(r)
}

impl Allocation {
    pub fn total_allocated(&self) -> Decimal {
        self.shares.iter().map(|s| s.amount).sum()
    }

    /// Pool left over (positive) or overspent (negative) after rounding each share.
    ///
    /// Rounding remainders are not redistributed.
    pub fn drift(&self) -> Decimal {
        self.pool - self.total_allocated()
    }
}

/// Round to whole pence, ties to even.
pub fn round_to_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Split `pool` between `employees` in proportion to the time each worked in `range`.
///
/// Fails without producing any shares when nobody worked in the range or the
/// hours worked are too large to total.
pub fn allocate(
    employees: &[EmployeeRecord],
    range: &MonthRange,
    pool: &TipPool,
) -> Result<Allocation, AllocationError> {
    let hours_overflow = || AllocationError::HoursOverflow {
        range: range.to_string(),
    };
    let worked: Vec<(&EmployeeRecord, WorkDuration)> = employees
        .iter()
        .map(|e| total_worked(e, range).map(|d| (e, d)).ok_or_else(hours_overflow))
        .collect::<Result<_, _>>()?;

    let total_minutes = worked
        .iter()
        .try_fold(WorkDuration::ZERO, |acc, (_, d)| acc.checked_add(*d))
        .ok_or_else(hours_overflow)?
        .minutes();
    if total_minutes == 0 {
        return Err(AllocationError::NoHoursInRange {
            range: range.to_string(),
        });
    }

    let overflow = || AllocationError::Overflow { pool: pool.amount() };
    let total_hours = minutes_to_hours(total_minutes);
    let ratio = pool.amount().checked_div(total_hours).ok_or_else(overflow)?;

    log::info!(
        "Allocating {} over {} hours in {} ({} per hour)",
        pool.amount(),
        total_hours.round_dp(2),
        range,
        ratio.round_dp(4)
    );

    let shares = worked
        .into_iter()
        .map(|(employee, duration)| {
            // pool * minutes / total keeps exact ratios exact before the final rounding
            let amount = pool
                .amount()
                .checked_mul(Decimal::from(duration.minutes()))
                .and_then(|v| v.checked_div(Decimal::from(total_minutes)))
                .ok_or_else(overflow)?;
            let share = Share {
                name: employee.name.clone(),
                worked: duration,
                hours: minutes_to_hours(duration.minutes()),
                amount: round_to_currency(amount),
            };
            log::debug!("{}: {} -> {}", share.name, share.worked, share.amount);
            Ok(share)
        })
        .collect::<Result<Vec<_>, AllocationError>>()?;

    let allocation = Allocation {
        range: *range,
        pool: pool.amount(),
        total_hours,
        ratio,
        shares,
    };
    if !allocation.drift().is_zero() {
        log::info!("Rounding drift of {} left unallocated", allocation.drift());
    }
    Ok(allocation)
}

fn minutes_to_hours(minutes: u64) -> Decimal {
    Decimal::from(minutes) / dec!(60)
}
