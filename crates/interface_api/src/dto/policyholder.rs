//! Policyholder DTOs

use chrono::NaiveDate;
use domain_party::{Policyholder, PolicyholderUpdate};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePolicyholderRequest {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl From<CreatePolicyholderRequest> for Policyholder {
    fn from(req: CreatePolicyholderRequest) -> Self {
        Policyholder::new(req.id, req.name, req.contact_number, req.email, req.date_of_birth)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePolicyholderRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<UpdatePolicyholderRequest> for PolicyholderUpdate {
    fn from(req: UpdatePolicyholderRequest) -> Self {
        PolicyholderUpdate {
            name: req.name,
            contact_number: req.contact_number,
            email: req.email,
            date_of_birth: req.date_of_birth,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PolicyholderResponse {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl From<&Policyholder> for PolicyholderResponse {
    fn from(holder: &Policyholder) -> Self {
        Self {
            id: holder.id.to_string(),
            name: holder.name.clone(),
            contact_number: holder.contact_number.clone(),
            email: holder.email.clone(),
            date_of_birth: holder.date_of_birth,
        }
    }
}
