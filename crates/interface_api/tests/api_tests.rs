//! HTTP API Tests
//!
//! Drives the router in-process with `axum-test` against an engine frozen at
//! 2023-06-20.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use claims_engine::ClaimsEngine;
use core_kernel::FixedClock;
use interface_api::{config::ApiConfig, create_router};
use serde_json::{json, Value};
use test_utils::DateFixtures;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn server() -> TestServer {
    let engine = ClaimsEngine::with_clock(Arc::new(FixedClock::new(DateFixtures::today())));
    TestServer::new(create_router(engine, ApiConfig::default())).unwrap()
}

fn holder_body() -> Value {
    json!({
        "id": "PH001",
        "name": "John Doe",
        "contact_number": "+1234567890",
        "email": "john@example.com",
        "date_of_birth": "1980-01-01"
    })
}

fn policy_body() -> Value {
    json!({
        "id": "POL001",
        "policyholder_id": "PH001",
        "type": "Auto",
        "start_date": "2023-01-01",
        "end_date": "2024-01-01",
        "coverage_amount": 50000,
        "premium": 1000
    })
}

fn claim_body() -> Value {
    json!({
        "id": "CL001",
        "policy_id": "POL001",
        "date_of_incident": "2023-06-01",
        "description": "Car accident",
        "amount": 5000,
        "date_submitted": "2023-06-15"
    })
}

/// Server holding PH001, POL001, and CL001
async fn scenario_server() -> TestServer {
    let server = server();
    server.post("/policyholders").json(&holder_body()).await.assert_status(StatusCode::CREATED);
    server.post("/policies").json(&policy_body()).await.assert_status(StatusCode::CREATED);
    server.post("/claims").json(&claim_body()).await.assert_status(StatusCode::CREATED);
    server
}

// ============================================================================
// HEALTH
// ============================================================================

#[tokio::test]
async fn test_health() {
    let server = server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_record_counts() {
    let server = scenario_server().await;

    let body = server.get("/health/ready").await.json::<Value>();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["address"], "0.0.0.0:8080");
    assert_eq!(body["records"], json!({"policyholders": 1, "policies": 1, "claims": 1}));
}

// ============================================================================
// POLICYHOLDERS
// ============================================================================

#[tokio::test]
async fn test_create_and_get_policyholder() {
    let server = server();

    let created = server.post("/policyholders").json(&holder_body()).await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(created.json::<Value>(), holder_body());

    let fetched = server.get("/policyholders/PH001").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), holder_body());
}

#[tokio::test]
async fn test_duplicate_policyholder_conflict() {
    let server = scenario_server().await;

    let response = server.post("/policyholders").json(&holder_body()).await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "duplicate_key");
    assert_eq!(body["message"], "Policyholder with ID PH001 already exists");
}

#[tokio::test]
async fn test_invalid_email_bad_request() {
    let server = server();
    let mut body = holder_body();
    body["email"] = json!("john.example.com");

    let response = server.post("/policyholders").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "invalid_format");
    assert_eq!(body["message"], "Invalid email format");
}

#[tokio::test]
async fn test_underage_policyholder_unprocessable() {
    let server = server();
    let mut body = holder_body();
    body["date_of_birth"] = json!("2006-01-01");

    let response = server.post("/policyholders").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"], "business_rule_violation");
}

#[tokio::test]
async fn test_empty_name_fails_request_validation() {
    let server = server();
    let mut body = holder_body();
    body["name"] = json!("");

    let response = server.post("/policyholders").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "validation_error");
}

#[tokio::test]
async fn test_malformed_json_bad_request() {
    let server = server();

    let response = server
        .post("/policyholders")
        .bytes(Bytes::from_static(b"{\"id\": \"PH001\""))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "bad_request");
}

#[tokio::test]
async fn test_missing_policyholder_not_found() {
    let server = server();

    let response = server.get("/policyholders/PH404").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Policyholder with ID PH404 does not exist");
}

#[tokio::test]
async fn test_update_policyholder() {
    let server = scenario_server().await;

    let response = server
        .put("/policyholders/PH001")
        .json(&json!({"email": "john@work.example"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["email"], "john@work.example");
    assert_eq!(body["name"], "John Doe");
}

#[tokio::test]
async fn test_failed_update_leaves_policyholder_unchanged() {
    let server = scenario_server().await;

    server
        .put("/policyholders/PH001")
        .json(&json!({"name": "Johnny", "contact_number": "abc"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body = server.get("/policyholders/PH001").await.json::<Value>();
    assert_eq!(body["name"], "John Doe");
}

#[tokio::test]
async fn test_birth_date_update_rejected_when_policy_would_be_underage() {
    let server = scenario_server().await;

    let response = server
        .put("/policyholders/PH001")
        .json(&json!({"date_of_birth": "2005-06-01"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["message"],
        "Policyholder must be at least 18 years old at policy start date"
    );
    let body = server.get("/policyholders/PH001").await.json::<Value>();
    assert_eq!(body["date_of_birth"], "1980-01-01");
}

#[tokio::test]
async fn test_list_policyholders() {
    let server = scenario_server().await;
    let mut second = holder_body();
    second["id"] = json!("PH002");
    second["name"] = json!("Jane Roe");
    server.post("/policyholders").json(&second).await.assert_status(StatusCode::CREATED);

    let body = server.get("/policyholders").await.json::<Value>();

    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["id"], "PH001");
    assert_eq!(body[1]["name"], "Jane Roe");
}

#[tokio::test]
async fn test_list_policyholder_policies() {
    let server = scenario_server().await;

    let body = server.get("/policyholders/PH001/policies").await.json::<Value>();

    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], "POL001");
    assert_eq!(body[0]["type"], "Auto");
}

// ============================================================================
// POLICIES
// ============================================================================

#[tokio::test]
async fn test_policy_amounts_are_json_numbers() {
    let server = scenario_server().await;

    let body = server.get("/policies/POL001").await.json::<Value>();

    assert_eq!(body["coverage_amount"].as_f64(), Some(50000.0));
    assert_eq!(body["premium"].as_f64(), Some(1000.0));
    assert_eq!(body["start_date"], "2023-01-01");
}

#[tokio::test]
async fn test_policy_for_unknown_holder_not_found() {
    let server = server();

    let response = server.post("/policies").json(&policy_body()).await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "not_found");
}

#[tokio::test]
async fn test_policy_with_reversed_dates_bad_request() {
    let server = server();
    server.post("/policyholders").json(&holder_body()).await;
    let mut body = policy_body();
    body["start_date"] = json!("2024-01-01");
    body["end_date"] = json!("2023-01-01");

    let response = server.post("/policies").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Policy start date must be before end date");
}

#[tokio::test]
async fn test_list_policies() {
    let server = scenario_server().await;

    let response = server.get("/policies").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["policyholder_id"], "PH001");
    assert_eq!(body[0]["coverage_amount"].as_f64(), Some(50000.0));
}

#[tokio::test]
async fn test_update_policy_uses_type_field() {
    let server = scenario_server().await;

    let response = server
        .put("/policies/POL001")
        .json(&json!({"type": "Home", "coverage_amount": 75000.5}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["type"], "Home");
    assert_eq!(body["coverage_amount"].as_f64(), Some(75000.5));
    assert_eq!(body["premium"].as_f64(), Some(1000.0));

    let stored = server.get("/policies/POL001").await.json::<Value>();
    assert_eq!(stored["type"], "Home");
}

#[tokio::test]
async fn test_update_policy_with_empty_type_fails_validation() {
    let server = scenario_server().await;

    let response = server.put("/policies/POL001").json(&json!({"type": ""})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "validation_error");
}

#[tokio::test]
async fn test_list_policy_claims() {
    let server = scenario_server().await;
    let mut second = claim_body();
    second["id"] = json!("CL002");
    second["amount"] = json!(250.75);
    server.post("/claims").json(&second).await.assert_status(StatusCode::CREATED);

    let response = server.get("/policies/POL001/claims").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["id"], "CL001");
    assert_eq!(body[1]["amount"].as_f64(), Some(250.75));
}

// ============================================================================
// CLAIMS
// ============================================================================

#[tokio::test]
async fn test_list_claims() {
    let server = scenario_server().await;

    let body = server.get("/claims").await.json::<Value>();

    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], "CL001");
    assert_eq!(body[0]["status"], "Submitted");
}

#[tokio::test]
async fn test_update_claim_amount_and_description() {
    let server = scenario_server().await;

    let response = server
        .put("/claims/CL001")
        .json(&json!({"description": "Rear-end collision", "amount": 7500.25}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["description"], "Rear-end collision");
    assert_eq!(body["amount"].as_f64(), Some(7500.25));
    assert_eq!(body["status"], "Submitted");
}

#[tokio::test]
async fn test_update_claim_with_empty_description_fails_validation() {
    let server = scenario_server().await;

    let response = server.put("/claims/CL001").json(&json!({"description": ""})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "validation_error");
    let stored = server.get("/claims/CL001").await.json::<Value>();
    assert_eq!(stored["description"], "Car accident");
}

#[tokio::test]
async fn test_claim_defaults_and_wire_format() {
    let server = scenario_server().await;

    let body = server.get("/claims/CL001").await.json::<Value>();

    assert_eq!(body["status"], "Submitted");
    assert_eq!(body["amount"].as_f64(), Some(5000.0));
    assert_eq!(body["date_submitted"], "2023-06-15");
}

#[tokio::test]
async fn test_claim_over_coverage_bad_request() {
    let server = scenario_server().await;
    let mut body = claim_body();
    body["id"] = json!("CL002");
    body["amount"] = json!(60000);

    let response = server.post("/claims").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "invalid_format");
}

#[tokio::test]
async fn test_late_claim_unprocessable() {
    let server = scenario_server().await;
    let mut body = claim_body();
    body["id"] = json!("CL002");
    body["date_submitted"] = json!("2023-07-02");

    let response = server.post("/claims").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["message"],
        "Claims must be submitted within 30 days of the incident"
    );
}

#[tokio::test]
async fn test_status_update_uses_wire_strings() {
    let server = scenario_server().await;

    let response = server
        .put("/claims/CL001/status")
        .json(&json!({"status": "Under Review"}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "Under Review");
}

#[tokio::test]
async fn test_unknown_status_bad_request() {
    let server = scenario_server().await;

    let response = server
        .put("/claims/CL001/status")
        .json(&json!({"status": "Paid"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid claim status: Paid");
}

#[tokio::test]
async fn test_closed_claim_rejects_update() {
    let server = scenario_server().await;
    server
        .put("/claims/CL001/status")
        .json(&json!({"status": "Closed"}))
        .await
        .assert_status_ok();

    let response = server
        .put("/claims/CL001")
        .json(&json!({"description": "Amended"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["message"], "Cannot update a closed claim");
}

#[tokio::test]
async fn test_audit_headers_do_not_gate_requests() {
    let server = scenario_server().await;

    let response = server
        .get("/claims/CL001")
        .add_header(HeaderName::from_static("x-user-id"), HeaderValue::from_static("adjuster-7"))
        .add_header(HeaderName::from_static("x-user-role"), HeaderValue::from_static("adjuster"))
        .await;

    response.assert_status_ok();
}

// ============================================================================
// CASCADES
// ============================================================================

#[tokio::test]
async fn test_approve_then_delete_policy_removes_claim() {
    let server = scenario_server().await;
    server
        .put("/claims/CL001/status")
        .json(&json!({"status": "Approved"}))
        .await
        .assert_status_ok();

    let response = server.delete("/policies/POL001").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"policyholders": [], "policies": ["POL001"], "claims": ["CL001"]})
    );
    server.get("/claims/CL001").await.assert_status_not_found();
    server.get("/policyholders/PH001").await.assert_status_ok();
}

#[tokio::test]
async fn test_delete_policyholder_cascades() {
    let server = scenario_server().await;

    let response = server.delete("/policyholders/PH001").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"policyholders": ["PH001"], "policies": ["POL001"], "claims": ["CL001"]})
    );
    server.get("/policies/POL001").await.assert_status_not_found();
    server.get("/policies/POL001/claims").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_claim_returns_summary() {
    let server = scenario_server().await;

    let response = server.delete("/claims/CL001").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"policyholders": [], "policies": [], "claims": ["CL001"]})
    );
    server.get("/claims/CL001").await.assert_status_not_found();
    server.get("/policies/POL001").await.assert_status_ok();
}

#[tokio::test]
async fn test_delete_missing_claim_not_found() {
    let server = server();

    server.delete("/claims/CL404").await.assert_status_not_found();
}
