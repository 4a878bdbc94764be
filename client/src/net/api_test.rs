use super::*;

#[test]
fn transform_endpoint_is_the_bff_route() {
    assert_eq!(TRANSFORM_ENDPOINT, "/api/transform/hl7v2-to-fhir");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "sign-in failed: 401");
    assert_eq!(login_failed_message(503), "sign-in failed: 503");
}
