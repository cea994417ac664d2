//! Policy entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{DateRange, PolicyId, PolicyholderId};

/// A coverage contract owned by one policyholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Owning policyholder
    pub policyholder_id: PolicyholderId,
    /// Free-text product type (e.g. "Auto")
    #[serde(rename = "type")]
    pub policy_type: String,
    /// First covered day
    pub start_date: NaiveDate,
    /// Last covered day
    pub end_date: NaiveDate,
    /// Maximum payout per claim
    pub coverage_amount: Decimal,
    /// Premium charged
    pub premium: Decimal,
}

impl Policy {
    pub fn new(
        id: impl Into<PolicyId>,
        policyholder_id: impl Into<PolicyholderId>,
        policy_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        coverage_amount: Decimal,
        premium: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            policyholder_id: policyholder_id.into(),
            policy_type: policy_type.into(),
            start_date,
            end_date,
            coverage_amount,
            premium,
        }
    }

    /// The covered period, if the dates are correctly ordered
    pub fn period(&self) -> Option<DateRange> {
        DateRange::new(self.start_date, self.end_date).ok()
    }

    /// True if `date` lies within the policy period, both ends included
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns a copy with the update's provided fields applied
    pub fn with_update(&self, update: &PolicyUpdate) -> Self {
        let mut candidate = self.clone();
        if let Some(ref policy_type) = update.policy_type {
            candidate.policy_type = policy_type.clone();
        }
        if let Some(start_date) = update.start_date {
            candidate.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            candidate.end_date = end_date;
        }
        if let Some(coverage_amount) = update.coverage_amount {
            candidate.coverage_amount = coverage_amount;
        }
        if let Some(premium) = update.premium {
            candidate.premium = premium;
        }
        candidate
    }
}

/// Partial update for a policy; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyUpdate {
    #[serde(rename = "type")]
    pub policy_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub coverage_amount: Option<Decimal>,
    pub premium: Option<Decimal>,
}

impl PolicyUpdate {
    pub fn policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = Some(policy_type.into());
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn coverage_amount(mut self, coverage_amount: Decimal) -> Self {
        self.coverage_amount = Some(coverage_amount);
        self
    }

    pub fn premium(mut self, premium: Decimal) -> Self {
        self.premium = Some(premium);
        self
    }
}
