//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use imagefeed_common::testing::TempDir;
use imagefeed_domain::{ImageFeedError, TokenBackend};
use imagefeed_infra::config;

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new("config-toml").expect("temp dir");
    let path = dir
        .write_file(
            "imagefeed.toml",
            r#"
[auth]
access_key = "toml-access"
secret_key = "toml-secret"

[api]
base_url = "http://localhost:8080"
max_attempts = 3

[storage]
backend = "keychain"

[feed]
per_page = 20
"#,
        )
        .expect("write config");

    let config = config::load_from_file(Some(path)).expect("config should load");

    assert_eq!(config.auth.access_key, "toml-access");
    assert_eq!(config.auth.secret_key, "toml-secret");
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.max_attempts, 3);
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.storage.backend, TokenBackend::Keychain);
    assert_eq!(config.feed.per_page, 20);
    assert_eq!(config.feed.avatar_ttl_secs, 300);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new("config-json").expect("temp dir");
    let path = dir
        .write_file(
            "config.json",
            r#"{
                "auth": { "access_key": "json-access" },
                "storage": { "backend": "file", "settings_path": "/tmp/imagefeed-test.json" }
            }"#,
        )
        .expect("write config");

    let config = config::load_from_file(Some(path)).expect("config should load");

    assert_eq!(config.auth.access_key, "json-access");
    assert_eq!(config.storage.backend, TokenBackend::File);
    assert_eq!(config.storage.settings_path.to_string_lossy(), "/tmp/imagefeed-test.json");
    assert_eq!(config.feed.per_page, 10);
}

#[test]
fn test_load_config_missing_file() {
    let dir = TempDir::new("config-missing").expect("temp dir");
    let err = config::load_from_file(Some(dir.child("absent.toml"))).unwrap_err();
    assert!(matches!(err, ImageFeedError::Config(msg) if msg.contains("not found")));
}

#[test]
fn test_load_config_malformed_file() {
    let dir = TempDir::new("config-bad").expect("temp dir");
    let path = dir.write_file("imagefeed.json", "{ \"auth\": ").expect("write config");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(matches!(err, ImageFeedError::Config(msg) if msg.contains("Invalid JSON")));
}

#[test]
fn test_empty_access_key_fails_validation() {
    let dir = TempDir::new("config-empty").expect("temp dir");
    let path = dir.write_file("imagefeed.toml", "[feed]\nper_page = 5\n").expect("write config");

    let config = config::load_from_file(Some(path)).expect("config should parse");
    assert!(matches!(config.validate(), Err(ImageFeedError::Config(_))));
}
