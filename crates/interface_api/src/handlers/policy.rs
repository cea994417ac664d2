//! Policy handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use claims_engine::DeletionSummary;
use core_kernel::{DomainError, PolicyId};
use domain_policy::Policy;

use crate::dto::claims::ClaimResponse;
use crate::dto::policy::*;
use crate::extract::ValidatedJson;
use crate::{error::ApiError, AppState};

/// Issues a policy to an existing policyholder
pub async fn create_policy(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<PolicyResponse>), ApiError> {
    let mut engine = state.engine.write().await;
    let policy = engine.create_policy(Policy::from(request))?;
    Ok((StatusCode::CREATED, Json(PolicyResponse::from(&policy))))
}

/// Lists policies
pub async fn list_policies(State(state): State<AppState>) -> Json<Vec<PolicyResponse>> {
    let engine = state.engine.read().await;
    Json(engine.policies().map(PolicyResponse::from).collect())
}

/// Gets a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let id = PolicyId::new(id);
    let engine = state.engine.read().await;
    engine
        .get_policy(&id)
        .map(|policy| Json(PolicyResponse::from(policy)))
        .ok_or_else(|| DomainError::not_found(PolicyId::entity(), &id).into())
}

/// Updates a policy
pub async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePolicyRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let mut engine = state.engine.write().await;
    let policy = engine.update_policy(&PolicyId::new(id), request.into())?;
    Ok(Json(PolicyResponse::from(&policy)))
}

/// Deletes a policy with its claims
pub async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletionSummary>, ApiError> {
    let mut engine = state.engine.write().await;
    Ok(Json(engine.delete_policy(&PolicyId::new(id))?))
}

/// Lists the claims made under a policy
pub async fn list_policy_claims(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let id = PolicyId::new(id);
    let engine = state.engine.read().await;
    if engine.get_policy(&id).is_none() {
        return Err(DomainError::not_found(PolicyId::entity(), &id).into());
    }
    Ok(Json(engine.claims_for(&id).map(ClaimResponse::from).collect()))
}
