//! Policy validation rules

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{DateRange, DomainError, DomainResult, ADULT_AGE_YEARS};
use core_kernel::temporal::has_reached_age;

use crate::policy::Policy;

/// Fails with `InvalidFormat` unless `start` is strictly before `end`
pub fn validate_policy_dates(start: NaiveDate, end: NaiveDate) -> DomainResult<()> {
    DateRange::new(start, end)?;
    Ok(())
}

/// Fails with `InvalidFormat` unless `amount` is strictly positive
///
/// `field` names the value in the error message, e.g. "Coverage amount".
pub fn validate_amount(field: &str, amount: Decimal) -> DomainResult<()> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::invalid_format(format!("{} must be positive", field)));
    }
    Ok(())
}

/// Fails with `BusinessRuleViolation` if the holder is under 18 on `start_date`
pub fn validate_age_at_start(date_of_birth: NaiveDate, start_date: NaiveDate) -> DomainResult<()> {
    if !has_reached_age(date_of_birth, start_date, ADULT_AGE_YEARS) {
        return Err(DomainError::rule_violation(
            "Policyholder must be at least 18 years old at policy start date",
        ));
    }
    Ok(())
}

/// Validator for whole policy records
pub struct PolicyValidator;

impl PolicyValidator {
    /// Checks the policy's own fields: date ordering, then coverage, then premium
    pub fn validate_terms(policy: &Policy) -> DomainResult<()> {
        validate_policy_dates(policy.start_date, policy.end_date)?;
        validate_amount("Coverage amount", policy.coverage_amount)?;
        validate_amount("Premium", policy.premium)
    }

    /// Checks the policy's terms and the holder's age at the start date
    pub fn validate(policy: &Policy, holder_date_of_birth: NaiveDate) -> DomainResult<()> {
        Self::validate_terms(policy)?;
        validate_age_at_start(holder_date_of_birth, policy.start_date)
    }
}
