//! Transformation proxy route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the transformation service directly: this
//! handler authenticates the caller, applies rate limits, forwards the raw
//! HL7v2 text upstream, and passes the upstream's status and body back
//! verbatim. Operational failures of the proxy itself are reported as FHIR
//! `OperationOutcome` bodies in the same diagnostic envelope the upstream
//! uses, so the client needs exactly one error decoder.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use axum::extract::State;
use axum::http::{StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use fhirwire::{IssueType, OperationOutcome};

use crate::rate_limit::RateLimitError;
use crate::routes::auth::AuthUser;
use crate::state::AppState;

/// Path of the HL7v2 → FHIR operation on the upstream service.
pub const TRANSFORM_PATH: &str = "/transform/v2tofhir";

/// Outcome reported when the caller is rate limited.
fn throttled_outcome(err: &RateLimitError) -> (StatusCode, OperationOutcome) {
    (StatusCode::TOO_MANY_REQUESTS, OperationOutcome::throttled(&err.to_string()))
}

/// Outcome reported when the upstream service cannot be reached or its
/// response cannot be read.
fn upstream_error(message: &str) -> (StatusCode, OperationOutcome) {
    (StatusCode::BAD_GATEWAY, OperationOutcome::error(IssueType::Exception, message))
}

/// `POST /api/transform/hl7v2-to-fhir` — authenticated proxy to the
/// upstream transformation service.
pub async fn transform_hl7v2(
    State(state): State<AppState>,
    auth: AuthUser,
    body: String,
) -> Response {
    if let Err(err) = state.rate_limiter.check_and_record(auth.user.id) {
        tracing::warn!(user = %auth.user.id, error = %err, "transform rate limited");
        let (status, outcome) = throttled_outcome(&err);
        return (status, Json(outcome)).into_response();
    }

    let url = state.upstream.transform_url();
    let upstream = state
        .http
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "text/plain")
        .body(body)
        .send()
        .await;

    let resp = match upstream {
        Ok(resp) => resp,
        Err(err) => {
            tracing::error!(error = %err, %url, "transform upstream unreachable");
            let (status, outcome) = upstream_error("transformation service unreachable");
            return (status, Json(outcome)).into_response();
        }
    };

    let status =
        StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_owned();

    match resp.bytes().await {
        Ok(bytes) => {
            tracing::debug!(status = %status, bytes = bytes.len(), "transform proxied");
            (status, [(CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "transform upstream body unreadable");
            let (status, outcome) = upstream_error("transformation service returned an unreadable body");
            (status, Json(outcome)).into_response()
        }
    }
}
