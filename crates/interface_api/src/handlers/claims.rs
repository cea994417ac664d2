//! Claims handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use claims_engine::DeletionSummary;
use core_kernel::{ClaimId, DomainError};
use domain_claims::{ClaimStatus, ClaimUpdate, NewClaim};

use crate::dto::claims::*;
use crate::extract::ValidatedJson;
use crate::{error::ApiError, AppState};

/// Submits a claim
pub async fn create_claim(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let new_claim = NewClaim::try_from(request)?;
    let mut engine = state.engine.write().await;
    let claim = engine.create_claim(new_claim)?;
    Ok((StatusCode::CREATED, Json(ClaimResponse::from(&claim))))
}

/// Lists claims
pub async fn list_claims(State(state): State<AppState>) -> Json<Vec<ClaimResponse>> {
    let engine = state.engine.read().await;
    Json(engine.claims().map(ClaimResponse::from).collect())
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = ClaimId::new(id);
    let engine = state.engine.read().await;
    engine
        .get_claim(&id)
        .map(|claim| Json(ClaimResponse::from(claim)))
        .ok_or_else(|| DomainError::not_found(ClaimId::entity(), &id).into())
}

/// Updates a claim
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let update = ClaimUpdate::try_from(request)?;
    let mut engine = state.engine.write().await;
    let claim = engine.update_claim(&ClaimId::new(id), update)?;
    Ok(Json(ClaimResponse::from(&claim)))
}

/// Updates claim status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let status: ClaimStatus = request.status.parse()?;
    let mut engine = state.engine.write().await;
    let claim = engine.update_claim_status(&ClaimId::new(id), status)?;
    Ok(Json(ClaimResponse::from(&claim)))
}

/// Deletes a claim
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletionSummary>, ApiError> {
    let mut engine = state.engine.write().await;
    Ok(Json(engine.delete_claim(&ClaimId::new(id))?))
}
