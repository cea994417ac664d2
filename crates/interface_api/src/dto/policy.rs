//! Policy DTOs

use chrono::NaiveDate;
use domain_policy::{Policy, PolicyUpdate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePolicyRequest {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "policyholder_id must not be empty"))]
    pub policyholder_id: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub policy_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub coverage_amount: Decimal,
    pub premium: Decimal,
}

impl From<CreatePolicyRequest> for Policy {
    fn from(req: CreatePolicyRequest) -> Self {
        Policy::new(
            req.id,
            req.policyholder_id,
            req.policy_type,
            req.start_date,
            req.end_date,
            req.coverage_amount,
            req.premium,
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePolicyRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub policy_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub coverage_amount: Option<Decimal>,
    pub premium: Option<Decimal>,
}

impl From<UpdatePolicyRequest> for PolicyUpdate {
    fn from(req: UpdatePolicyRequest) -> Self {
        PolicyUpdate {
            policy_type: req.policy_type,
            start_date: req.start_date,
            end_date: req.end_date,
            coverage_amount: req.coverage_amount,
            premium: req.premium,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: String,
    pub policyholder_id: String,
    #[serde(rename = "type")]
    pub policy_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub coverage_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub premium: Decimal,
}

impl From<&Policy> for PolicyResponse {
    fn from(policy: &Policy) -> Self {
        Self {
            id: policy.id.to_string(),
            policyholder_id: policy.policyholder_id.to_string(),
            policy_type: policy.policy_type.clone(),
            start_date: policy.start_date,
            end_date: policy.end_date,
            coverage_amount: policy.coverage_amount,
            premium: policy.premium,
        }
    }
}
