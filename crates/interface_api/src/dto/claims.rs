//! Claims DTOs

use chrono::NaiveDate;
use core_kernel::DomainError;
use domain_claims::{Claim, ClaimStatus, ClaimUpdate, NewClaim};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Parses an optional wire status string
fn parse_status(status: Option<String>) -> Result<Option<ClaimStatus>, DomainError> {
    status.map(|s| s.parse()).transpose()
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "policy_id must not be empty"))]
    pub policy_id: String,
    pub date_of_incident: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub status: Option<String>,
    pub date_submitted: Option<NaiveDate>,
}

impl TryFrom<CreateClaimRequest> for NewClaim {
    type Error = DomainError;

    fn try_from(req: CreateClaimRequest) -> Result<Self, Self::Error> {
        let mut claim = NewClaim::new(req.id, req.policy_id, req.date_of_incident, req.description, req.amount);
        claim.status = parse_status(req.status)?;
        claim.date_submitted = req.date_submitted;
        Ok(claim)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClaimRequest {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<String>,
}

impl TryFrom<UpdateClaimRequest> for ClaimUpdate {
    type Error = DomainError;

    fn try_from(req: UpdateClaimRequest) -> Result<Self, Self::Error> {
        Ok(ClaimUpdate {
            description: req.description,
            amount: req.amount,
            status: parse_status(req.status)?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    pub policy_id: String,
    pub date_of_incident: NaiveDate,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    pub status: String,
    pub date_submitted: NaiveDate,
}

impl From<&Claim> for ClaimResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            policy_id: claim.policy_id.to_string(),
            date_of_incident: claim.date_of_incident,
            description: claim.description.clone(),
            amount: claim.amount,
            status: claim.status.to_string(),
            date_submitted: claim.date_submitted,
        }
    }
}
