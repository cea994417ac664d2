//! Core error types used across the system
//!
//! Every validator and engine operation fails with a `DomainError`. Callers
//! branch on [`DomainError::kind`] rather than on message text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::temporal::TemporalError;

/// Classification of a domain failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A referenced entity id is absent
    NotFound,
    /// An id collides with an existing record on create
    DuplicateKey,
    /// Malformed input: email, phone, date ordering, non-positive amounts
    InvalidFormat,
    /// A domain policy was breached: underage holder, late claim, closed claim
    BusinessRuleViolation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::DuplicateKey => "duplicate_key",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::BusinessRuleViolation => "business_rule_violation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type shared by the domain crates and the claims engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity} with ID {id} does not exist")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} with ID {id} already exists")]
    DuplicateKey { entity: &'static str, id: String },

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    BusinessRuleViolation(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn duplicate(entity: &'static str, id: impl fmt::Display) -> Self {
        DomainError::DuplicateKey {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        DomainError::InvalidFormat(message.into())
    }

    pub fn rule_violation(message: impl Into<String>) -> Self {
        DomainError::BusinessRuleViolation(message.into())
    }

    /// Returns the failure classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            DomainError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            DomainError::BusinessRuleViolation(_) => ErrorKind::BusinessRuleViolation,
        }
    }
}

impl From<TemporalError> for DomainError {
    fn from(err: TemporalError) -> Self {
        match err {
            TemporalError::InvalidPeriod { .. } => {
                DomainError::InvalidFormat("Policy start date must be before end date".to_string())
            }
        }
    }
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
