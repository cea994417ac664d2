//! Test Data Builders
//!
//! Builders start from the reference scenario so tests only spell out the
//! fields they care about.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use core_kernel::{ClaimId, PolicyId, PolicyholderId};
use domain_claims::{ClaimStatus, NewClaim};
use domain_party::Policyholder;
use domain_policy::Policy;

use crate::fixtures::ScenarioFixtures;

/// Builder for policyholders
pub struct PolicyholderBuilder {
    inner: Policyholder,
}

impl Default for PolicyholderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyholderBuilder {
    pub fn new() -> Self {
        Self {
            inner: ScenarioFixtures::policyholder(),
        }
    }

    pub fn with_id(mut self, id: impl Into<PolicyholderId>) -> Self {
        self.inner.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    pub fn with_contact_number(mut self, contact_number: impl Into<String>) -> Self {
        self.inner.contact_number = contact_number.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = email.into();
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.inner.date_of_birth = date_of_birth;
        self
    }

    /// Sets the birth date so the holder is `days` old on `on`
    pub fn aged_days(mut self, days: u64, on: NaiveDate) -> Self {
        self.inner.date_of_birth = on - Days::new(days);
        self
    }

    pub fn build(self) -> Policyholder {
        self.inner
    }
}

/// Builder for policies
pub struct PolicyBuilder {
    inner: Policy,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            inner: ScenarioFixtures::policy(),
        }
    }

    pub fn with_id(mut self, id: impl Into<PolicyId>) -> Self {
        self.inner.id = id.into();
        self
    }

    pub fn with_policyholder_id(mut self, id: impl Into<PolicyholderId>) -> Self {
        self.inner.policyholder_id = id.into();
        self
    }

    pub fn with_type(mut self, policy_type: impl Into<String>) -> Self {
        self.inner.policy_type = policy_type.into();
        self
    }

    pub fn with_dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.inner.start_date = start_date;
        self.inner.end_date = end_date;
        self
    }

    pub fn with_coverage(mut self, coverage_amount: Decimal) -> Self {
        self.inner.coverage_amount = coverage_amount;
        self
    }

    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.inner.premium = premium;
        self
    }

    pub fn build(self) -> Policy {
        self.inner
    }
}

/// Builder for claim submissions
pub struct ClaimBuilder {
    inner: NewClaim,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            inner: ScenarioFixtures::claim(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ClaimId>) -> Self {
        self.inner.id = id.into();
        self
    }

    pub fn with_policy_id(mut self, id: impl Into<PolicyId>) -> Self {
        self.inner.policy_id = id.into();
        self
    }

    pub fn with_incident(mut self, date_of_incident: NaiveDate) -> Self {
        self.inner.date_of_incident = date_of_incident;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.inner.amount = amount;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.inner.status = Some(status);
        self
    }

    pub fn submitted_on(mut self, date: NaiveDate) -> Self {
        self.inner.date_submitted = Some(date);
        self
    }

    /// Submits `days` after the incident
    pub fn submitted_after(mut self, days: u64) -> Self {
        self.inner.date_submitted = Some(self.inner.date_of_incident + Days::new(days));
        self
    }

    /// Leaves the submission date for the engine to default
    pub fn without_submission_date(mut self) -> Self {
        self.inner.date_submitted = None;
        self
    }

    pub fn build(self) -> NewClaim {
        self.inner
    }
}
