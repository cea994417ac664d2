//! Party Management Domain
//!
//! This crate holds the policyholder entity and the validators that guard
//! its contact details and age.
//!
//! # Validation Rules
//!
//! - Email must look like `local@domain.tld`
//! - Phone is an optional `+`, an optional leading `1`, then 9 to 15 digits
//! - Date of birth cannot be in the future
//! - The holder must be at least 18 (365-day years) as of today
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_party::{Policyholder, PolicyholderValidator};
//!
//! let holder = Policyholder::new(
//!     "PH001",
//!     "John Doe",
//!     "+1234567890",
//!     "john@example.com",
//!     NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
//! );
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert!(PolicyholderValidator::validate(&holder, today).is_ok());
//! ```

pub mod policyholder;
pub mod validation;

pub use policyholder::{Policyholder, PolicyholderUpdate};
pub use validation::{
    PolicyholderValidator, validate_email, validate_phone, validate_date_of_birth,
};
