//! Claim aggregate

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, DomainError, PolicyId};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Received, not yet looked at
    #[default]
    Submitted,
    /// Being assessed
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Approved for payment
    Approved,
    /// Rejected
    Rejected,
    /// Closed; no further changes allowed
    Closed,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::Submitted,
        ClaimStatus::UnderReview,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
        ClaimStatus::Closed,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::UnderReview => "Under Review",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::Closed => "Closed",
        }
    }

    /// True once the claim can no longer be modified
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Closed)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::invalid_format(format!("Invalid claim status: {}", s)))
    }
}

/// A claim against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Policy the claim is made under
    pub policy_id: PolicyId,
    /// Date of the insured incident
    pub date_of_incident: NaiveDate,
    /// What happened
    pub description: String,
    /// Amount claimed
    pub amount: Decimal,
    /// Status
    pub status: ClaimStatus,
    /// Date the claim was submitted
    pub date_submitted: NaiveDate,
}

impl Claim {
    /// Returns a copy with the update's provided fields applied
    pub fn with_update(&self, update: &ClaimUpdate) -> Self {
        let mut candidate = self.clone();
        if let Some(ref description) = update.description {
            candidate.description = description.clone();
        }
        if let Some(amount) = update.amount {
            candidate.amount = amount;
        }
        if let Some(status) = update.status {
            candidate.status = status;
        }
        candidate
    }

    /// Days between the incident and submission
    pub fn submission_delay_days(&self) -> i64 {
        core_kernel::temporal::days_between(self.date_of_incident, self.date_submitted)
    }
}

/// Input for submitting a claim
///
/// `status` defaults to Submitted and `date_submitted` to the current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClaim {
    pub id: ClaimId,
    pub policy_id: PolicyId,
    pub date_of_incident: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub status: Option<ClaimStatus>,
    #[serde(default)]
    pub date_submitted: Option<NaiveDate>,
}

impl NewClaim {
    pub fn new(
        id: impl Into<ClaimId>,
        policy_id: impl Into<PolicyId>,
        date_of_incident: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            policy_id: policy_id.into(),
            date_of_incident,
            description: description.into(),
            amount,
            status: None,
            date_submitted: None,
        }
    }

    pub fn status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn submitted_on(mut self, date: NaiveDate) -> Self {
        self.date_submitted = Some(date);
        self
    }

    /// Builds the claim, filling defaults with `today` as the submission date
    pub fn into_claim(self, today: NaiveDate) -> Claim {
        Claim {
            id: self.id,
            policy_id: self.policy_id,
            date_of_incident: self.date_of_incident,
            description: self.description,
            amount: self.amount,
            status: self.status.unwrap_or_default(),
            date_submitted: self.date_submitted.unwrap_or(today),
        }
    }
}

/// Partial update for a claim; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimUpdate {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<ClaimStatus>,
}

impl ClaimUpdate {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }
}
