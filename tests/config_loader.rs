use hacker_stories::config::{Config, ConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://hn.algolia.com/api/v1");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert!(config.api.discard_stale_responses);
    assert_eq!(config.search.default_term, "React");
    assert!(config.storage.path.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://localhost:9000/api/v1"
discard_stale_responses = false

[search]
default_term = "Rust"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9000/api/v1");
    assert!(!config.api.discard_stale_responses);
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.search.default_term, "Rust");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_storage_and_log_paths() {
    let (_dir, path) = write_config(
        r#"
[storage]
path = "/tmp/hs/storage.json"

[logging]
level = "debug"
file = "/tmp/hs/app.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.storage.resolved_path(), PathBuf::from("/tmp/hs/storage.json"));
    assert_eq!(config.logging.resolved_file(), PathBuf::from("/tmp/hs/app.log"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_default_paths_are_namespaced() {
    let config = Config::default();
    assert!(config.storage.resolved_path().ends_with("hacker-stories/storage.json"));
    assert!(config.logging.resolved_file().ends_with("hacker-stories/hacker-stories.log"));
    assert!(Config::config_path().ends_with("hacker-stories/config.toml"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_bad_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp://example.com"));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let (_dir, path) = write_config("[api]\ntimeout_seconds = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
