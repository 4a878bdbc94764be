use super::*;

#[test]
fn user_deserializes_from_session_json() {
    let raw = r#"{"id":"u-9","name":"Sam","auth_method":"access-code"}"#;
    let user: User = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(user.name, "Sam");
    assert_eq!(user.auth_method, "access-code");
}

#[test]
fn response_info_success_covers_2xx_only() {
    let mut info = ResponseInfo::default();
    assert!(!info.is_success());

    info.status = Some(200);
    assert!(info.is_success());
    info.status = Some(299);
    assert!(info.is_success());
    info.status = Some(300);
    assert!(!info.is_success());
    info.status = Some(429);
    assert!(!info.is_success());
}
