//! Integration Tests for configuration loading

use std::fs;

use ansiscroll::{init_with_config, Config, ConfigLoader, Error, FormatMode};
use tempfile::TempDir;

#[test]
fn test_save_and_reload_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.scrollback.max_entries = 42;
    config.formatting.enabled = false;
    ConfigLoader::save_to_path(&config, &path).unwrap();

    let loaded = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_and_reload_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.input.history_size = 5;
    ConfigLoader::save_to_path(&config, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"history_size\": 5"));
    assert_eq!(ConfigLoader::load_from_path(&path).unwrap(), config);
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.input.history_size = 0;
    assert!(matches!(
        ConfigLoader::save_to_path(&config, &path),
        Err(Error::ConfigValidation(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_init_with_config_builds_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[formatting]\nenabled = false\n\n[scrollback]\nmax_entries = 2\n").unwrap();

    let session = init_with_config(&path).unwrap();
    assert_eq!(session.scrollback.mode(), FormatMode::Disabled);
    assert_eq!(session.scrollback.max_entries(), 2);
}

#[test]
fn test_missing_config_file_errors() {
    let dir = TempDir::new().unwrap();
    let err = init_with_config(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, Error::ConfigLoadFailed { .. }));
}
