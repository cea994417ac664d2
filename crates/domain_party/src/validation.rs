//! Policyholder validation rules
//!
//! Each validator fails with a `DomainError` carrying its own kind, so the
//! caller learns why a value was rejected:
//!
//! | Check | Failure kind |
//! |---|---|
//! | Email format | `InvalidFormat` |
//! | Phone format | `InvalidFormat` |
//! | Date of birth in the future | `InvalidFormat` |
//! | Younger than 18 | `BusinessRuleViolation` |

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use core_kernel::{DomainError, DomainResult, ADULT_AGE_YEARS};
use core_kernel::temporal::has_reached_age;

use crate::policyholder::Policyholder;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("phone pattern is valid"));

/// Checks that `email` has a non-empty local part and a dotted domain
pub fn validate_email(email: &str) -> DomainResult<()> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(DomainError::invalid_format("Invalid email format"))
    }
}

/// Checks that `phone` is an optional `+`, optional `1`, then 9-15 digits
pub fn validate_phone(phone: &str) -> DomainResult<()> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(DomainError::invalid_format("Invalid phone number format"))
    }
}

/// Checks that the date of birth is not in the future and the holder is an adult
pub fn validate_date_of_birth(date_of_birth: NaiveDate, today: NaiveDate) -> DomainResult<()> {
    if date_of_birth > today {
        return Err(DomainError::invalid_format("Date of birth cannot be in the future"));
    }
    if !has_reached_age(date_of_birth, today, ADULT_AGE_YEARS) {
        return Err(DomainError::rule_violation(
            "Policyholder must be at least 18 years old",
        ));
    }
    Ok(())
}

/// Validator for whole policyholder records
pub struct PolicyholderValidator;

impl PolicyholderValidator {
    /// Runs the email, phone, and date-of-birth checks in that order,
    /// stopping at the first failure
    pub fn validate(policyholder: &Policyholder, today: NaiveDate) -> DomainResult<()> {
        validate_email(&policyholder.email)?;
        validate_phone(&policyholder.contact_number)?;
        validate_date_of_birth(policyholder.date_of_birth, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_email_requires_dotted_domain() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("john.doe@mail.example.co.uk").is_ok());
        assert!(validate_email("john@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("john@.com").is_err());
        assert!(validate_email("invalid_email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_phone_formats() {
        assert!(validate_phone("+1234567890").is_ok());
        assert!(validate_phone("123456789").is_ok());
        assert!(validate_phone("+11234567890").is_ok());
        assert!(validate_phone("123-456-7890").is_err());
        assert!(validate_phone("12345678").is_err());
        assert!(validate_phone("+1234567890123456789").is_err());
    }

    #[test]
    fn test_future_date_of_birth_is_invalid_format() {
        let err = validate_date_of_birth(date(2030, 1, 1), date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_minor_is_rule_violation() {
        let err = validate_date_of_birth(date(2010, 1, 1), date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
    }

    #[test]
    fn test_born_today_is_rule_violation() {
        let today = date(2024, 1, 1);
        let err = validate_date_of_birth(today, today).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
    }
}
