//! Claims Management Domain
//!
//! This crate models a claim for payout under a policy and the rules a claim
//! must satisfy against that policy.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted -> Under Review -> Approved/Rejected -> Closed
//! ```
//!
//! Any status may be set while a claim is open; once a claim is Closed it
//! can no longer be modified.

pub mod claim;
pub mod validation;

pub use claim::{Claim, ClaimStatus, ClaimUpdate, NewClaim};
pub use validation::{
    ClaimValidator, MAX_SUBMISSION_DELAY_DAYS,
    validate_incident_within_policy, validate_claim_amount, validate_submission_timing,
    ensure_modifiable,
};
