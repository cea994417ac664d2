//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims system test suite.
//!
//! # Modules
//!
//! - `fixtures`: The reference PH001 / POL001 / CL001 scenario and fixed dates
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Assertion helpers for `DomainError` kinds
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
