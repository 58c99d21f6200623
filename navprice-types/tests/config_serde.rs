use std::time::Duration;

use navprice_types::{ErrorKind, FetchError, NavpriceConfig, OutputFormat};

#[test]
fn default_config_uses_ten_second_timeout() {
    let cfg = NavpriceConfig::default();
    assert_eq!(cfg.request_timeout, Duration::from_secs(10));
    assert!(cfg.user_agent.starts_with("navprice/"));
}

#[test]
fn config_roundtrips_through_json() {
    let cfg = NavpriceConfig {
        request_timeout: Duration::from_millis(2500),
        user_agent: "test-agent".to_string(),
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: NavpriceConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.request_timeout, cfg.request_timeout);
    assert_eq!(back.user_agent, "test-agent");
}

#[test]
fn output_format_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn error_kind_serializes_as_label() {
    let v = serde_json::to_value(FetchError::parse("abc").kind()).unwrap();
    assert_eq!(v, serde_json::json!("parse_error"));
    assert_eq!(ErrorKind::NetworkError.to_string(), "network_error");
}
