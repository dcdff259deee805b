//! Property-based tests for settings persistence.
//!
//! Whatever valid settings are written through the SettingsEngine, a fresh
//! engine reading the same file sees exactly those settings.

use mcbe_preview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use mcbe_preview::types::settings::{
    AppSettings, EndpointSettings, LoggingSettings, StorageSettings,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_endpoint_settings() -> impl Strategy<Value = EndpointSettings> {
    (
        prop_oneof![Just("http"), Just("https")],
        "[a-z][a-z0-9-]{2,15}(\\.[a-z]{2,5})?(:[0-9]{2,5})?",
        "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        1u64..=600u64,
    )
        .prop_map(|(scheme, host, render_path, timeout_secs)| EndpointSettings {
            base_url: format!("{}://{}", scheme, host),
            render_path,
            timeout_secs,
        })
}

fn arb_storage_settings() -> impl Strategy<Value = StorageSettings> {
    proptest::option::of("/[a-zA-Z0-9_/.-]{1,40}")
        .prop_map(|database_path| StorageSettings { database_path })
}

fn arb_logging_settings() -> impl Strategy<Value = LoggingSettings> {
    prop_oneof![
        Just("error"),
        Just("warn"),
        Just("info"),
        Just("debug"),
        Just("trace"),
        Just("mcbe_preview=debug,reqwest=warn"),
    ]
    .prop_map(|level| LoggingSettings {
        level: level.to_string(),
    })
}

fn arb_app_settings() -> impl Strategy<Value = AppSettings> {
    (
        arb_endpoint_settings(),
        arb_storage_settings(),
        arb_logging_settings(),
    )
        .prop_map(|(endpoint, storage, logging)| AppSettings {
            endpoint,
            storage,
            logging,
        })
}

// *For any* valid `AppSettings`, writing each section with `set_value` and
// loading from a new engine SHALL produce an equal struct.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_survive_save_and_reload(settings in arb_app_settings()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.load().unwrap();
        for (key, value) in [
            ("endpoint", serde_json::to_value(&settings.endpoint).unwrap()),
            ("storage", serde_json::to_value(&settings.storage).unwrap()),
            ("logging", serde_json::to_value(&settings.logging).unwrap()),
        ] {
            engine.set_value(key, value).expect("whole sections are valid keys");
        }

        let mut reloaded = SettingsEngine::new(Some(path));
        let loaded = reloaded.load().unwrap();

        prop_assert_eq!(loaded, settings);
    }

    #[test]
    fn render_url_joins_with_single_slash(
        base in "https?://[a-z]{3,10}(:[0-9]{2,5})?/{0,2}",
        path in "/{0,2}[a-z]{1,8}(/[a-z]{1,8}){0,2}",
    ) {
        let endpoint = EndpointSettings {
            base_url: base.clone(),
            render_path: path.clone(),
            timeout_secs: 30,
        };
        let url = endpoint.render_url();
        let after_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or_default();
        prop_assert!(!after_scheme.contains("//"), "doubled slash in {}", url);
        prop_assert!(url.ends_with(path.trim_start_matches('/')));
    }
}
