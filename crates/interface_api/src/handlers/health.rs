//! Health check handlers

use axum::{extract::State, Json};
use claims_engine::EngineStats;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub address: String,
    pub records: EngineStats,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check with the configured address and record counts
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let records = state.engine.read().await.stats();
    Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        address: state.config.server_addr(),
        records,
    })
}
