//! Environment-driven configuration tests
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Every test that touches PORT is marked with #[serial].

use md_cover_common::config::{ServerConfig, DEFAULT_PORT, DEFAULT_STATIC_DIR, PORT_ENV_VAR};
use md_cover_common::Error;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

#[test]
#[serial]
fn test_from_env_without_port_uses_default() {
    env::remove_var(PORT_ENV_VAR);

    let config = ServerConfig::from_env().expect("config should resolve");

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
}

#[test]
#[serial]
fn test_from_env_empty_port_uses_default() {
    env::set_var(PORT_ENV_VAR, "");

    let config = ServerConfig::from_env().expect("config should resolve");
    assert_eq!(config.port, 8080);

    env::remove_var(PORT_ENV_VAR);
}

#[test]
#[serial]
fn test_from_env_reads_port() {
    env::set_var(PORT_ENV_VAR, "5123");

    let config = ServerConfig::from_env().expect("config should resolve");
    assert_eq!(config.port, 5123);
    assert_eq!(config.bind_addr().port(), 5123);

    env::remove_var(PORT_ENV_VAR);
}

#[test]
#[serial]
fn test_from_env_invalid_port_is_config_error() {
    env::set_var(PORT_ENV_VAR, "not-a-port");

    let result = ServerConfig::from_env();
    assert!(matches!(result, Err(Error::Config(_))));

    env::remove_var(PORT_ENV_VAR);
}
