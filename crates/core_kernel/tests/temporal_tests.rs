//! Tests for calendar helpers

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use core_kernel::temporal::{
    approx_years_between, days_between, has_reached_age, Clock, DateRange, FixedClock,
    SystemClock, APPROX_DAYS_PER_YEAR,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_days_between_is_signed() {
    assert_eq!(days_between(date(2023, 6, 1), date(2023, 6, 15)), 14);
    assert_eq!(days_between(date(2023, 6, 15), date(2023, 6, 1)), -14);
}

#[test]
fn test_approx_years_between() {
    assert_eq!(approx_years_between(date(1980, 1, 1), date(2023, 1, 1)), 43);
    assert_eq!(approx_years_between(date(2023, 1, 1), date(2023, 12, 31)), 0);
}

#[test]
fn test_system_clock_is_not_in_the_past() {
    let today = SystemClock.today();
    assert!(today > date(2024, 1, 1));
}

#[test]
fn test_leap_days_push_threshold_earlier() {
    // Born on a leap day; the 18th "birthday" by 365-day arithmetic lands
    // before the calendar anniversary.
    let dob = date(2004, 2, 29);
    let threshold = dob + Days::new(18 * APPROX_DAYS_PER_YEAR as u64);
    assert!(threshold < date(2022, 2, 28));
    assert!(has_reached_age(dob, threshold, 18));
}

proptest! {
    #[test]
    fn prop_range_contains_its_bounds(offset in 0u64..20_000, len in 1u64..5_000) {
        let start = date(1970, 1, 1) + Days::new(offset);
        let end = start + Days::new(len);
        let range = DateRange::new(start, end).unwrap();
        prop_assert!(range.contains(start));
        prop_assert!(range.contains(end));
        prop_assert!(!range.contains(end + Days::new(1)));
        prop_assert_eq!(range.days(), len as i64);
    }

    #[test]
    fn prop_fixed_clock_returns_its_date(offset in 0u64..40_000) {
        let d = date(1950, 1, 1) + Days::new(offset);
        prop_assert_eq!(FixedClock::new(d).today(), d);
    }
}
