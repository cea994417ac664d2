//! API middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use chrono::Utc;
use tracing::{info, warn};

/// Header carrying the caller's user id, set by the upstream gateway
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the caller's role, set by the upstream gateway
pub const USER_ROLE_HEADER: &str = "x-user-role";

fn header_value(request: &Request<Body>, name: &str) -> String {
    request
        .headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("anonymous")
        .to_string()
}

/// Audit logging middleware
///
/// Logs every request with the gateway identity headers. Nothing is enforced
/// here; authentication happens upstream.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_id = header_value(&request, USER_ID_HEADER);
    let role = header_value(&request, USER_ROLE_HEADER);

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            user = %user_id,
            role = %role,
            status = %status.as_u16(),
            duration_ms = duration.num_milliseconds(),
            "API request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            user = %user_id,
            role = %role,
            status = %status.as_u16(),
            duration_ms = duration.num_milliseconds(),
            "API request"
        );
    }

    response
}
