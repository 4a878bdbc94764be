use super::*;

// =============================================================
// Request lifecycle
// =============================================================

#[test]
fn default_screen_is_idle() {
    let screen = TransformScreen::default();
    assert!(screen.input.is_empty());
    assert!(screen.output.is_empty());
    assert!(!screen.is_loading);
    assert!(!screen.is_error);
    assert!(!screen.alert_open);
    assert_eq!(screen.status_code, None);
    assert_eq!(screen.output_format, OutputFormat::Json);
}

#[test]
fn begin_request_clears_output_and_prior_error() {
    let mut screen = TransformScreen::default();
    screen.complete_failure(400, None, "boom");
    screen.output = "stale".to_owned();

    assert!(screen.begin_request());
    assert!(screen.is_loading);
    assert!(screen.output.is_empty());
    assert!(!screen.is_error);
    assert_eq!(screen.error_message, None);
    assert_eq!(screen.status_code, None);
}

#[test]
fn begin_request_refuses_reentry_while_loading() {
    let mut screen = TransformScreen::default();
    assert!(screen.begin_request());
    assert!(!screen.begin_request());
    assert!(screen.is_loading);
}

#[test]
fn success_pretty_prints_with_two_space_indent() {
    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_success(200, &serde_json::json!({"a": 1}));

    assert_eq!(screen.output, "{\n  \"a\": 1\n}");
    assert!(!screen.is_loading);
    assert!(!screen.is_error);
    assert_eq!(screen.status_code, Some(200));
}

#[test]
fn success_text_keeps_body_verbatim() {
    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_success_text(200, "<Bundle/>");
    assert_eq!(screen.output, "<Bundle/>");
    assert!(!screen.is_error);
}

// =============================================================
// Failure handling
// =============================================================

#[test]
fn failure_with_diagnostic_envelope_extracts_message() {
    let body = serde_json::json!({
        "issue": [{ "details": { "text": "{\"message\":\"bad field\"}" } }]
    });
    let raw = body.to_string();

    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_failure(400, Some(&body), &raw);

    assert!(screen.is_error);
    assert_eq!(screen.status_code, Some(400));
    assert_eq!(screen.display_message(), Some("bad field".to_owned()));
    assert!(screen.output.contains("issue"));
}

#[test]
fn failure_without_issue_field_leaves_message_blank_but_shows_body() {
    let body = serde_json::json!({"unexpected": true});
    let raw = body.to_string();

    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_failure(400, Some(&body), &raw);

    assert!(screen.is_error);
    assert_eq!(screen.display_message(), None);
    assert!(screen.output.contains("unexpected"));
}

#[test]
fn failure_with_non_json_body_shows_raw_text() {
    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_failure(502, None, "upstream said no");

    assert!(screen.is_error);
    assert_eq!(screen.output, "upstream said no");
    assert_eq!(screen.display_message(), None);
}

#[test]
fn status_429_always_displays_throttled_message() {
    let body = serde_json::json!({
        "issue": [{ "details": { "text": "{\"message\":\"something else\"}" } }]
    });
    let raw = body.to_string();

    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_failure(429, Some(&body), &raw);

    assert_eq!(screen.display_message(), Some(THROTTLED_MESSAGE.to_owned()));
}

#[test]
fn transport_failure_sets_error_without_status() {
    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_transport_failure();

    assert!(screen.is_error);
    assert_eq!(screen.status_code, None);
    assert_eq!(screen.display_message(), None);
    assert!(!screen.is_loading);
}

#[test]
fn dismiss_error_clears_flag_only() {
    let mut screen = TransformScreen::default();
    screen.begin_request();
    screen.complete_failure(400, None, "body");
    screen.dismiss_error();

    assert!(!screen.is_error);
    assert_eq!(screen.output, "body");
}

// =============================================================
// Sample loading + editing
// =============================================================

#[test]
fn load_sample_populates_input_and_opens_alert() {
    let mut screen = TransformScreen::default();
    screen.load_sample("MSH|^~\\&|...");

    assert_eq!(screen.input, "MSH|^~\\&|...");
    assert!(screen.alert_open);

    screen.dismiss_alert();
    assert!(!screen.alert_open);
    assert_eq!(screen.input, "MSH|^~\\&|...");
}

#[test]
fn clear_input_and_output_are_independent() {
    let mut screen = TransformScreen::default();
    screen.set_input("in".to_owned());
    screen.output = "out".to_owned();

    screen.clear_input();
    assert!(screen.input.is_empty());
    assert_eq!(screen.output, "out");

    screen.set_input("in2".to_owned());
    screen.clear_output();
    assert!(screen.output.is_empty());
    assert_eq!(screen.input, "in2");
}

#[test]
fn output_format_extensions() {
    assert_eq!(OutputFormat::Json.extension(), "json");
    assert_eq!(OutputFormat::Xml.extension(), "xml");
}
