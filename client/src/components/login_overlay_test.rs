use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  Pat  ", " FHIR01 "),
        Ok(("Pat".to_owned(), "FHIR01".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_name() {
    assert_eq!(
        validate_login_input("   ", "FHIR01"),
        Err("Enter both a display name and an access code.")
    );
}

#[test]
fn validate_login_input_requires_code() {
    assert_eq!(
        validate_login_input("Pat", ""),
        Err("Enter both a display name and an access code.")
    );
}
