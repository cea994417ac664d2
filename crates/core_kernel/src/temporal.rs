//! Calendar date handling
//!
//! All domain dates are calendar dates (`NaiveDate`). This module provides:
//! - A `Clock` abstraction so "today" can be pinned in tests
//! - An inclusive `DateRange` for policy periods
//! - Day-count helpers, including the 365-days-per-year age approximation

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Days per year used by every age rule in the system.
///
/// Ages are computed as `days / 365`, ignoring leap days. Someone a few
/// days short of their 18th birthday can already be past the threshold.
pub const APPROX_DAYS_PER_YEAR: i64 = 365;

/// Minimum policyholder age in years
pub const ADULT_AGE_YEARS: i64 = 18;

/// Source of the current calendar date
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock frozen at a fixed date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range where `start` is strictly before `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start >= end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the date falls within the range, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        days_between(self.start, self.end)
    }
}

/// Signed number of days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Whole years between two dates using `APPROX_DAYS_PER_YEAR`
pub fn approx_years_between(from: NaiveDate, to: NaiveDate) -> i64 {
    days_between(from, to).div_euclid(APPROX_DAYS_PER_YEAR)
}

/// True if someone born on `date_of_birth` is at least `years` old on `on`
pub fn has_reached_age(date_of_birth: NaiveDate, on: NaiveDate, years: i64) -> bool {
    days_between(date_of_birth, on) >= years * APPROX_DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        assert!(DateRange::new(date(2024, 1, 1), date(2023, 1, 1)).is_err());
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let range = DateRange::new(date(2023, 1, 1), date(2024, 1, 1)).unwrap();
        assert!(range.contains(date(2023, 1, 1)));
        assert!(range.contains(date(2024, 1, 1)));
        assert!(!range.contains(date(2024, 1, 2)));
        assert_eq!(range.days(), 365);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(date(2024, 6, 1));
        assert_eq!(clock.today(), date(2024, 6, 1));
    }

    #[test]
    fn test_has_reached_age_uses_365_day_years() {
        // 2006-01-01 -> 2024-01-01 spans 18 calendar years and 6574 days,
        // four more than 18 * 365
        assert!(has_reached_age(date(2006, 1, 1), date(2024, 1, 1), 18));
        assert!(has_reached_age(date(2006, 1, 1), date(2023, 12, 28), 18));
        assert!(!has_reached_age(date(2006, 1, 1), date(2023, 12, 27), 18));
    }
}
