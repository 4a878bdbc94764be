use super::*;

#[test]
fn transform_path_matches_upstream_contract() {
    assert_eq!(TRANSFORM_PATH, "/transform/v2tofhir");
}

#[test]
fn throttled_outcome_is_429_with_throttled_code() {
    let err = RateLimitError::PerUserExceeded { limit: 10, window_secs: 60 };
    let (status, outcome) = throttled_outcome(&err);

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(outcome.issue[0].code, fhirwire::IssueType::Throttled);

    // The diagnostic envelope must decode on the client side.
    let value = serde_json::to_value(&outcome).expect("serialize");
    assert_eq!(
        fhirwire::diagnostic_message(&value),
        Some("per-user rate limit exceeded (max 10 requests/60s)".to_owned())
    );
}

#[test]
fn upstream_error_is_502_exception_with_decodable_message() {
    let (status, outcome) = upstream_error("transformation service unreachable");

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(outcome.issue[0].code, fhirwire::IssueType::Exception);

    let value = serde_json::to_value(&outcome).expect("serialize");
    assert_eq!(
        fhirwire::diagnostic_message(&value),
        Some("transformation service unreachable".to_owned())
    );
}
