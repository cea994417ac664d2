//! Core Kernel - Foundational types and utilities for the claims system
//!
//! This crate provides the building blocks shared by the domain crates and
//! the claims engine:
//! - String-keyed identifiers for policyholders, policies, and claims
//! - Calendar date helpers, the `Clock` abstraction, and age arithmetic
//! - The shared error model (`DomainError` / `ErrorKind`)

pub mod identifiers;
pub mod temporal;
pub mod error;

pub use identifiers::{PolicyholderId, PolicyId, ClaimId};
pub use temporal::{
    Clock, SystemClock, FixedClock, DateRange, TemporalError,
    APPROX_DAYS_PER_YEAR, ADULT_AGE_YEARS,
};
pub use error::{DomainError, DomainResult, ErrorKind};
