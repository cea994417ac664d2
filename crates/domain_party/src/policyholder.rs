//! Policyholder entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::PolicyholderId;
use core_kernel::temporal::approx_years_between;

/// The insured individual who owns policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policyholder {
    /// Unique identifier
    pub id: PolicyholderId,
    /// Full name
    pub name: String,
    /// Contact phone number
    pub contact_number: String,
    /// Email address
    pub email: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
}

impl Policyholder {
    pub fn new(
        id: impl Into<PolicyholderId>,
        name: impl Into<String>,
        contact_number: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_number: contact_number.into(),
            email: email.into(),
            date_of_birth,
        }
    }

    /// Age in 365-day years on the given date
    pub fn age_on(&self, date: NaiveDate) -> i64 {
        approx_years_between(self.date_of_birth, date)
    }

    /// Returns a copy with the update's provided fields applied
    pub fn with_update(&self, update: &PolicyholderUpdate) -> Self {
        let mut candidate = self.clone();
        if let Some(ref name) = update.name {
            candidate.name = name.clone();
        }
        if let Some(ref contact_number) = update.contact_number {
            candidate.contact_number = contact_number.clone();
        }
        if let Some(ref email) = update.email {
            candidate.email = email.clone();
        }
        if let Some(date_of_birth) = update.date_of_birth {
            candidate.date_of_birth = date_of_birth;
        }
        candidate
    }
}

/// Partial update for a policyholder; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyholderUpdate {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl PolicyholderUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn contact_number(mut self, contact_number: impl Into<String>) -> Self {
        self.contact_number = Some(contact_number.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.contact_number.is_none()
            && self.email.is_none()
            && self.date_of_birth.is_none()
    }
}
