//! Policy Administration Domain
//!
//! A policy is a coverage contract between the insurer and one policyholder,
//! valid over a closed date range and capped by a coverage amount.
//!
//! # Issuance Rules
//!
//! | Rule | Failure kind |
//! |---|---|
//! | `start_date` strictly before `end_date` | `InvalidFormat` |
//! | `coverage_amount` and `premium` positive | `InvalidFormat` |
//! | Holder at least 18 (365-day years) on `start_date` | `BusinessRuleViolation` |
//!
//! The referential check (the policyholder exists) belongs to the claims
//! engine, which owns the policyholder records.

pub mod policy;
pub mod validation;

pub use policy::{Policy, PolicyUpdate};
pub use validation::{
    PolicyValidator, validate_policy_dates, validate_amount, validate_age_at_start,
};
