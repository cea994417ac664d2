//! Tests for the policy entity and its validation rules

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::ErrorKind;
use domain_policy::{Policy, PolicyUpdate, PolicyValidator, validate_amount, validate_policy_dates};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_test_policy() -> Policy {
    Policy::new(
        "POL001",
        "PH001",
        "Auto",
        date(2023, 1, 1),
        date(2024, 1, 1),
        dec!(50000),
        dec!(1000),
    )
}

fn holder_dob() -> NaiveDate {
    date(1980, 1, 1)
}

// ============================================================================
// Entity Tests
// ============================================================================

mod entity_tests {
    use super::*;

    #[test]
    fn test_covers_is_inclusive() {
        let policy = create_test_policy();

        assert!(policy.covers(date(2023, 1, 1)));
        assert!(policy.covers(date(2023, 6, 1)));
        assert!(policy.covers(date(2024, 1, 1)));
        assert!(!policy.covers(date(2022, 12, 31)));
        assert!(!policy.covers(date(2024, 1, 2)));
    }

    #[test]
    fn test_period_requires_ordered_dates() {
        let policy = create_test_policy();
        assert_eq!(policy.period().unwrap().days(), 365);

        let mut inverted = create_test_policy();
        inverted.end_date = date(2022, 1, 1);
        assert!(inverted.period().is_none());
    }

    #[test]
    fn test_with_update_is_a_candidate_copy() {
        let policy = create_test_policy();
        let update = PolicyUpdate::default()
            .coverage_amount(dec!(75000))
            .end_date(date(2025, 1, 1));

        let candidate = policy.with_update(&update);

        assert_eq!(candidate.coverage_amount, dec!(75000));
        assert_eq!(candidate.end_date, date(2025, 1, 1));
        assert_eq!(candidate.premium, dec!(1000));
        assert_eq!(candidate.policy_type, "Auto");
        assert_eq!(policy.coverage_amount, dec!(50000));
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let json = serde_json::to_value(create_test_policy()).unwrap();

        assert_eq!(json["type"], "Auto");
        assert_eq!(json["policyholder_id"], "PH001");
        assert_eq!(json["start_date"], "2023-01-01");
        assert!(json.get("policy_type").is_none());
    }
}

// ============================================================================
// Validator Tests
// ============================================================================

mod validator_tests {
    use super::*;

    #[test]
    fn test_valid_policy() {
        assert!(PolicyValidator::validate(&create_test_policy(), holder_dob()).is_ok());
    }

    #[test]
    fn test_inverted_dates_reported_before_amounts() {
        let mut policy = create_test_policy();
        policy.start_date = date(2024, 1, 1);
        policy.end_date = date(2023, 1, 1);
        policy.coverage_amount = Decimal::ZERO;

        let err = PolicyValidator::validate(&policy, holder_dob()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.to_string().contains("start date"));
    }

    #[test]
    fn test_zero_coverage_rejected() {
        let mut policy = create_test_policy();
        policy.coverage_amount = Decimal::ZERO;

        let err = PolicyValidator::validate_terms(&policy).unwrap_err();
        assert_eq!(err.to_string(), "Coverage amount must be positive");
    }

    #[test]
    fn test_negative_premium_rejected() {
        let mut policy = create_test_policy();
        policy.premium = dec!(-1);

        let err = PolicyValidator::validate_terms(&policy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(err.to_string(), "Premium must be positive");
    }

    #[test]
    fn test_underage_at_start_date() {
        let policy = create_test_policy();
        let dob = policy.start_date - Days::new(17 * 365);

        let err = PolicyValidator::validate(&policy, dob).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
    }

    #[test]
    fn test_age_boundary_at_start_date() {
        let policy = create_test_policy();
        let exactly_18 = policy.start_date - Days::new(18 * 365);

        assert!(PolicyValidator::validate(&policy, exactly_18).is_ok());
        assert!(PolicyValidator::validate(&policy, exactly_18 + Days::new(1)).is_err());
    }
}

proptest! {
    #[test]
    fn prop_non_increasing_dates_always_invalid(offset in 0u64..20_000, back in 0u64..5_000) {
        let end = date(1990, 1, 1) + Days::new(offset);
        let start = end + Days::new(back);
        let err = validate_policy_dates(start, end).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn prop_positive_amounts_valid(cents in 1i64..1_000_000_000) {
        prop_assert!(validate_amount("Coverage amount", Decimal::new(cents, 2)).is_ok());
    }

    #[test]
    fn prop_non_positive_amounts_invalid(cents in -1_000_000_000i64..=0) {
        prop_assert!(validate_amount("Coverage amount", Decimal::new(cents, 2)).is_err());
    }
}
