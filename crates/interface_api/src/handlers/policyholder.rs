//! Policyholder handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use claims_engine::DeletionSummary;
use core_kernel::{DomainError, PolicyholderId};
use domain_party::Policyholder;

use crate::dto::policy::PolicyResponse;
use crate::dto::policyholder::*;
use crate::extract::ValidatedJson;
use crate::{error::ApiError, AppState};

/// Registers a policyholder
pub async fn create_policyholder(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePolicyholderRequest>,
) -> Result<(StatusCode, Json<PolicyholderResponse>), ApiError> {
    let mut engine = state.engine.write().await;
    let holder = engine.create_policyholder(Policyholder::from(request))?;
    Ok((StatusCode::CREATED, Json(PolicyholderResponse::from(&holder))))
}

/// Lists policyholders
pub async fn list_policyholders(State(state): State<AppState>) -> Json<Vec<PolicyholderResponse>> {
    let engine = state.engine.read().await;
    Json(engine.policyholders().map(PolicyholderResponse::from).collect())
}

/// Gets a policyholder by ID
pub async fn get_policyholder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyholderResponse>, ApiError> {
    let id = PolicyholderId::new(id);
    let engine = state.engine.read().await;
    engine
        .get_policyholder(&id)
        .map(|holder| Json(PolicyholderResponse::from(holder)))
        .ok_or_else(|| DomainError::not_found(PolicyholderId::entity(), &id).into())
}

/// Updates a policyholder
pub async fn update_policyholder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePolicyholderRequest>,
) -> Result<Json<PolicyholderResponse>, ApiError> {
    let mut engine = state.engine.write().await;
    let holder = engine.update_policyholder(&PolicyholderId::new(id), request.into())?;
    Ok(Json(PolicyholderResponse::from(&holder)))
}

/// Deletes a policyholder with its policies and claims
pub async fn delete_policyholder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletionSummary>, ApiError> {
    let mut engine = state.engine.write().await;
    Ok(Json(engine.delete_policyholder(&PolicyholderId::new(id))?))
}

/// Lists the policies owned by a policyholder
pub async fn list_policyholder_policies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let id = PolicyholderId::new(id);
    let engine = state.engine.read().await;
    if engine.get_policyholder(&id).is_none() {
        return Err(DomainError::not_found(PolicyholderId::entity(), &id).into());
    }
    Ok(Json(engine.policies_for(&id).map(PolicyResponse::from).collect()))
}
