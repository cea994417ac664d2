//! Custom Test Assertions
//!
//! Helpers that report the actual error when an operation fails with the
//! wrong kind, instead of a bare `assert!(result.is_err())`.

use std::fmt::Debug;

use core_kernel::{DomainError, ErrorKind};

/// Asserts that `result` failed with the given kind and returns the error
///
/// # Panics
///
/// Panics if the result is `Ok` or fails with a different kind
pub fn assert_error_kind<T: Debug>(result: Result<T, DomainError>, expected: ErrorKind) -> DomainError {
    match result {
        Ok(value) => panic!("Expected {} error, operation succeeded with {:?}", expected, value),
        Err(err) => {
            assert_eq!(
                err.kind(),
                expected,
                "Expected {} error, got {}: {}",
                expected,
                err.kind(),
                err
            );
            err
        }
    }
}

pub fn assert_not_found<T: Debug>(result: Result<T, DomainError>) -> DomainError {
    assert_error_kind(result, ErrorKind::NotFound)
}

pub fn assert_duplicate<T: Debug>(result: Result<T, DomainError>) -> DomainError {
    assert_error_kind(result, ErrorKind::DuplicateKey)
}

pub fn assert_invalid_format<T: Debug>(result: Result<T, DomainError>) -> DomainError {
    assert_error_kind(result, ErrorKind::InvalidFormat)
}

pub fn assert_rule_violation<T: Debug>(result: Result<T, DomainError>) -> DomainError {
    assert_error_kind(result, ErrorKind::BusinessRuleViolation)
}

/// Asserts that the error message contains `fragment`
pub fn assert_message_contains(error: &DomainError, fragment: &str) {
    let message = error.to_string();
    assert!(
        message.contains(fragment),
        "Expected error message to contain {:?}, got {:?}",
        fragment,
        message
    );
}
