//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, reset behavior and the
//! database path resolution.

use mcbe_preview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use mcbe_preview::types::errors::SettingsError;
use mcbe_preview::types::settings::AppSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("config.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file the built-in defaults apply: the local render
/// endpoint and `info` logging.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.endpoint.render_url(), "http://127.0.0.1:8080/api/render");
    assert_eq!(settings.logging.level, "info");
}

/// After calling `set_value`, the change must be on disk so that a new
/// SettingsEngine reading the same file sees it.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value(
                "endpoint.base_url",
                serde_json::Value::String("https://render.example.net/".to_string()),
            )
            .unwrap();
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        let loaded = engine2.load().unwrap();
        assert_eq!(loaded.endpoint.base_url, "https://render.example.net/");
        assert_eq!(
            loaded.endpoint.render_url(),
            "https://render.example.net/api/render"
        );
    }
}

#[test]
fn test_set_value_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let err = engine
        .set_value("endpoint.retries", serde_json::json!(3))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));
    assert!(engine.set_value("", serde_json::json!(1)).is_err());
}

#[test]
fn test_set_value_wrong_type_leaves_settings_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let err = engine
        .set_value("endpoint.timeout_secs", serde_json::json!("soon"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue(_)));
    assert_eq!(engine.get_settings().endpoint.timeout_secs, 30);
}

#[test]
fn test_malformed_config_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ endpoint: ").unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
    assert_eq!(*engine.get_settings(), AppSettings::default());
}

#[test]
fn test_database_path_prefers_configured_value() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let custom = dir.path().join("custom.db");
    engine
        .set_value(
            "storage.database_path",
            serde_json::Value::String(custom.to_string_lossy().to_string()),
        )
        .unwrap();

    assert_eq!(engine.database_path(), custom);
}

#[test]
fn test_database_path_defaults_to_data_dir() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    let path = engine.database_path();
    assert_eq!(path.file_name().unwrap(), "mcbe-preview.db");
}

/// After modifying settings and calling `reset()`, all values must revert to
/// defaults and the defaults must be persisted to disk.
#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();

        engine
            .set_value("logging.level", serde_json::json!("debug"))
            .unwrap();
        engine
            .set_value("endpoint.timeout_secs", serde_json::json!(5))
            .unwrap();

        assert_eq!(engine.get_settings().logging.level, "debug");
        assert_eq!(engine.get_settings().endpoint.timeout_secs, 5);

        engine.reset().unwrap();

        assert_eq!(*engine.get_settings(), AppSettings::default());
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        let loaded = engine2.load().unwrap();
        assert_eq!(loaded, AppSettings::default());
    }
}
