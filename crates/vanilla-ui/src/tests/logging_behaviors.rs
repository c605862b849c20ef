//! Behavioral tests for subscriber installation

use vanilla_core::AppConfig;

use crate::logging;

#[test]
fn given_fresh_process_when_init_called_twice_then_installed_once() {
    let config = AppConfig::default();
    assert!(logging::init(&config));
    assert!(!logging::init(&config));
}
