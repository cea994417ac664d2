//! HTTP API Layer
//!
//! REST API over the claims engine using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One module per record type plus health checks
//! - **Middleware**: Request tracing, request ids, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Domain error kinds mapped to status codes
//!
//! The engine sits behind a `tokio::sync::RwLock`: mutating requests hold the
//! write lock across the whole validate-then-store sequence, reads share it.
//!
//! # Example
//!
//! ```rust,ignore
//! use claims_engine::ClaimsEngine;
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(ClaimsEngine::new(), ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, put},
    Router,
};
use claims_engine::ClaimsEngine;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, policy, policyholder};
use crate::middleware::audit_middleware;

/// Engine handle shared by all requests
pub type SharedEngine = Arc<RwLock<ClaimsEngine>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: SharedEngine,
    pub config: ApiConfig,
}

/// Creates the main API router around `engine`
pub fn create_router(engine: ClaimsEngine, config: ApiConfig) -> Router {
    router_with_state(AppState {
        engine: Arc::new(RwLock::new(engine)),
        config,
    })
}

/// Creates the router over existing state, e.g. an engine also held elsewhere
pub fn router_with_state(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let policyholder_routes = Router::new()
        .route(
            "/",
            get(policyholder::list_policyholders).post(policyholder::create_policyholder),
        )
        .route(
            "/:id",
            get(policyholder::get_policyholder)
                .put(policyholder::update_policyholder)
                .delete(policyholder::delete_policyholder),
        )
        .route("/:id/policies", get(policyholder::list_policyholder_policies));

    let policy_routes = Router::new()
        .route("/", get(policy::list_policies).post(policy::create_policy))
        .route(
            "/:id",
            get(policy::get_policy)
                .put(policy::update_policy)
                .delete(policy::delete_policy),
        )
        .route("/:id/claims", get(policy::list_policy_claims));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route(
            "/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        )
        .route("/:id/status", put(claims::update_status));

    let api_routes = Router::new()
        .nest("/policyholders", policyholder_routes)
        .nest("/policies", policy_routes)
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
