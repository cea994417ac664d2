//! Claim eligibility rules
//!
//! Checked against the policy the claim is made under. Note that an amount
//! above the policy's coverage is an `InvalidFormat` failure, grouped with
//! the non-positive amount check, while a late submission is a
//! `BusinessRuleViolation`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{DomainError, DomainResult};
use core_kernel::temporal::days_between;
use domain_policy::Policy;

use crate::claim::Claim;

/// Claims must be submitted within this many days of the incident
pub const MAX_SUBMISSION_DELAY_DAYS: i64 = 30;

/// Fails with `InvalidFormat` if the incident is outside `[start, end]`
pub fn validate_incident_within_policy(
    date_of_incident: NaiveDate,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> DomainResult<()> {
    if date_of_incident < start_date || date_of_incident > end_date {
        return Err(DomainError::invalid_format("Claim date must be within policy period"));
    }
    Ok(())
}

/// Fails with `InvalidFormat` unless `0 < amount <= coverage`
pub fn validate_claim_amount(amount: Decimal, coverage: Decimal) -> DomainResult<()> {
    if amount <= Decimal::ZERO || amount > coverage {
        return Err(DomainError::invalid_format(format!(
            "Claim amount must be positive and not exceed policy coverage of {}",
            coverage
        )));
    }
    Ok(())
}

/// Submission must not precede the incident and must follow it within 30 days
pub fn validate_submission_timing(
    date_of_incident: NaiveDate,
    date_submitted: NaiveDate,
) -> DomainResult<()> {
    if date_submitted < date_of_incident {
        return Err(DomainError::invalid_format(
            "Claim submission date cannot be earlier than the incident date",
        ));
    }
    if days_between(date_of_incident, date_submitted) > MAX_SUBMISSION_DELAY_DAYS {
        return Err(DomainError::rule_violation(
            "Claims must be submitted within 30 days of the incident",
        ));
    }
    Ok(())
}

/// Fails with `BusinessRuleViolation` if the claim is Closed
pub fn ensure_modifiable(claim: &Claim) -> DomainResult<()> {
    if claim.status.is_terminal() {
        return Err(DomainError::rule_violation("Cannot update a closed claim"));
    }
    Ok(())
}

/// Validator for whole claim records
pub struct ClaimValidator;

impl ClaimValidator {
    /// Runs the incident window, amount, and timing checks in that order
    pub fn validate(claim: &Claim, policy: &Policy) -> DomainResult<()> {
        validate_incident_within_policy(claim.date_of_incident, policy.start_date, policy.end_date)?;
        validate_claim_amount(claim.amount, policy.coverage_amount)?;
        validate_submission_timing(claim.date_of_incident, claim.date_submitted)
    }
}
