use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_FB_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_FB_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_FB_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_FB_EB_SURELY_UNSET__"), None);
}

// =============================================================================
// check_access_code
// =============================================================================

#[test]
fn no_configured_code_is_service_unavailable() {
    assert_eq!(check_access_code(None, "anything"), Err(StatusCode::SERVICE_UNAVAILABLE));
}

#[test]
fn wrong_code_is_unauthorized() {
    assert_eq!(check_access_code(Some("FHIR01"), "nope"), Err(StatusCode::UNAUTHORIZED));
}

#[test]
fn matching_code_passes() {
    assert_eq!(check_access_code(Some("FHIR01"), "FHIR01"), Ok(()));
}

#[test]
fn submitted_code_is_trimmed_before_comparison() {
    assert_eq!(check_access_code(Some("FHIR01"), "  FHIR01  "), Ok(()));
}

#[test]
fn comparison_is_case_sensitive() {
    assert_eq!(check_access_code(Some("FHIR01"), "fhir01"), Err(StatusCode::UNAUTHORIZED));
}

// =============================================================================
// normalize_display_name
// =============================================================================

#[test]
fn display_name_is_trimmed() {
    assert_eq!(normalize_display_name("  Pat  "), "Pat");
}

#[test]
fn blank_display_name_falls_back() {
    assert_eq!(normalize_display_name("   "), "Anonymous");
    assert_eq!(normalize_display_name(""), "Anonymous");
}
