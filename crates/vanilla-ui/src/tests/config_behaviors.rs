//! Behavioral tests for configuration resolution

use vanilla_core::AppConfig;

use crate::config::{resolve, source_of, ConfigSource};
use crate::error::UiError;

#[test]
fn given_no_document_when_resolved_then_defaults() {
    let config = resolve(None, None).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn given_blank_document_when_resolved_then_defaults() {
    let config = resolve(Some("  \n "), None).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn given_partial_document_when_resolved_then_named_fields_override() {
    let config = resolve(Some(r#"{"app_name": "Demo", "log_level": "debug"}"#), None)
        .expect("valid document");
    assert_eq!(config.app_name, "Demo");
    assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    assert_eq!(config.router_marker, "data-router");
}

#[test]
fn given_build_override_when_resolved_then_api_url_replaced() {
    let config = resolve(
        Some(r#"{"api_base_url": "https://from-document.test"}"#),
        Some("https://from-build.test"),
    )
    .expect("valid document");
    assert_eq!(config.api_base_url, "https://from-build.test");
}

#[test]
fn given_empty_build_override_when_resolved_then_ignored() {
    let config = resolve(None, Some("")).expect("defaults");
    assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
}

#[test]
fn given_malformed_document_when_resolved_then_core_error() {
    let result = resolve(Some("{not json"), None);
    assert!(matches!(
        result,
        Err(UiError::Core(vanilla_core::Error::InvalidConfig { .. }))
    ));
}

#[test]
fn given_missing_or_blank_element_when_classified_then_defaults_reported() {
    assert_eq!(source_of(None), ConfigSource::Defaults);
    assert_eq!(source_of(Some("   ")), ConfigSource::Defaults);
}

#[test]
fn given_inline_document_when_classified_then_inline_reported() {
    assert_eq!(source_of(Some(r#"{"app_name": "Demo"}"#)), ConfigSource::Inline);
}
