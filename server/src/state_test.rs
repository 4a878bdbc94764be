use super::*;

#[test]
fn upstream_config_trims_trailing_slash() {
    let config = UpstreamConfig::parse("https://transform.example.org/").expect("config");
    assert_eq!(config.base_url, "https://transform.example.org");
}

#[test]
fn upstream_config_keeps_clean_url() {
    let config = UpstreamConfig::parse("http://localhost:9090").expect("config");
    assert_eq!(config.base_url, "http://localhost:9090");
}

#[test]
fn upstream_config_rejects_blank() {
    assert!(UpstreamConfig::parse("   ").is_err());
    assert!(UpstreamConfig::parse("").is_err());
}

#[test]
fn transform_url_joins_base_and_path() {
    let config = UpstreamConfig::parse("http://localhost:9090/").expect("config");
    assert_eq!(config.transform_url(), "http://localhost:9090/transform/v2tofhir");
}
