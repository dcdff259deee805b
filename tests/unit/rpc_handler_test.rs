//! Unit tests for the RPC handler — all JSON-RPC methods dispatched by `handle_method`.
//!
//! These tests exercise every RPC method through the same code path used by the
//! real `mcbe-preview-rpc` binary, using an in-memory store, a temp config file
//! and a mock render endpoint.

#[path = "support/mock_endpoint.rs"]
mod mock_endpoint;

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::runtime::Runtime;

use mcbe_preview::app::App;
use mcbe_preview::rpc_handler::handle_method;
use mcbe_preview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use mcbe_preview::storage::memory_store::MemoryStore;
use mock_endpoint::MockEndpoint;

struct Fixture {
    app: Mutex<App>,
    runtime: Runtime,
    endpoint: MockEndpoint,
    _tmp: TempDir,
}

impl Fixture {
    fn call(&self, method: &str, params: Value) -> Result<Value, String> {
        handle_method(&self.app, &self.runtime, method, &params)
    }
}

/// Create a fresh App pointed at a mock endpoint that renders successfully.
fn setup() -> Fixture {
    setup_with(MockEndpoint::png())
}

fn setup_with(endpoint: MockEndpoint) -> Fixture {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let config = tmp.path().join("config.json").to_string_lossy().to_string();
    let mut settings = SettingsEngine::new(Some(config));
    settings.load().unwrap();
    settings
        .set_value("endpoint.base_url", json!(endpoint.base_url))
        .unwrap();

    let mut app = App::new(settings, Arc::new(MemoryStore::new())).expect("Failed to init App");
    app.startup();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    Fixture {
        app: Mutex::new(app),
        runtime,
        endpoint,
        _tmp: tmp,
    }
}

// ─── Ping ───

#[test]
fn test_ping() {
    let fx = setup();
    let res = fx.call("ping", json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

// ─── Unknown method ───

#[test]
fn test_unknown_method_returns_error() {
    let fx = setup();
    let res = fx.call("nonexistent.method", json!({}));
    assert_eq!(res.unwrap_err(), "unknown method: nonexistent.method");
}

// ─── Render ───

#[test]
fn test_render_submit_records_history() {
    let fx = setup();
    let res = fx
        .call("render.submit", json!({"mode": "text", "content": " §cRed "}))
        .unwrap();

    assert_eq!(res["record"]["content"], "§cRed");
    assert_eq!(res["record"]["mode"], "text");
    assert!(res["record"]["dataUrl"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert_eq!(res["history"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(res["history"]["empty"], false);
    assert_eq!(fx.endpoint.requests().len(), 1);
}

#[test]
fn test_render_submit_accepts_structured_alias() {
    let fx = setup();
    let res = fx
        .call("render.submit", json!({"mode": "structured", "content": "{}"}))
        .unwrap();
    assert_eq!(res["record"]["mode"], "tellraw");
}

#[test]
fn test_render_submit_missing_params() {
    let fx = setup();
    assert_eq!(
        fx.call("render.submit", json!({"mode": "text"})).unwrap_err(),
        "missing content"
    );
    assert_eq!(
        fx.call("render.submit", json!({"content": "x"})).unwrap_err(),
        "missing mode"
    );
    assert!(fx
        .call("render.submit", json!({"mode": "html", "content": "x"}))
        .unwrap_err()
        .contains("Mode must be"));
}

#[test]
fn test_render_submit_failure_posts_notice() {
    let fx = setup_with(MockEndpoint::json_error(400, "Invalid JSON"));
    let err = fx
        .call("render.submit", json!({"mode": "tellraw", "content": "{"}))
        .unwrap_err();
    assert_eq!(err, "Invalid JSON");

    let notice = fx.call("notice.get", json!({})).unwrap();
    assert_eq!(notice["message"], "Invalid JSON");

    fx.call("notice.dismiss", json!({})).unwrap();
    let notice = fx.call("notice.get", json!({})).unwrap();
    assert_eq!(notice["message"], Value::Null);
}

// ─── History ───

#[test]
fn test_history_list_empty_state() {
    let fx = setup();
    let res = fx.call("history.list", json!({})).unwrap();
    assert_eq!(res["items"], json!([]));
    assert_eq!(res["empty"], true);
    assert_eq!(res["active"], Value::Null);
    assert_eq!(res["collapsed"], false);
    assert_eq!(res["toggle"], "▾");
    assert_eq!(res["aria_expanded"], "true");
}

#[test]
fn test_history_get_and_select() {
    let fx = setup();
    fx.call("render.submit", json!({"mode": "text", "content": "first"}))
        .unwrap();
    fx.call("render.submit", json!({"mode": "text", "content": "second"}))
        .unwrap();

    let rec = fx.call("history.get", json!({"index": 1})).unwrap();
    assert_eq!(rec["content"], "first");

    fx.call("preview.set", json!({"mode": "text", "offset_x": 20, "scale": 150}))
        .unwrap();
    let res = fx.call("history.select", json!({"index": 1})).unwrap();
    assert_eq!(res["record"]["content"], "first");
    assert_eq!(res["active"], 1);
    assert_eq!(res["preview"]["offset_x"], 0);
    assert_eq!(res["preview"]["scale"], 100);

    let list = fx.call("history.list", json!({})).unwrap();
    assert_eq!(list["active"], 1);
    assert_eq!(list["items"][1]["active"], true);
    assert_eq!(list["items"][0]["active"], false);
}

#[test]
fn test_history_get_out_of_range() {
    let fx = setup();
    assert_eq!(
        fx.call("history.get", json!({"index": 3})).unwrap_err(),
        "history entry not found: 3"
    );
    assert_eq!(
        fx.call("history.select", json!({"index": 0})).unwrap_err(),
        "history entry not found: 0"
    );
    assert_eq!(
        fx.call("history.get", json!({})).unwrap_err(),
        "missing index"
    );
}

#[test]
fn test_history_toggle() {
    let fx = setup();
    let res = fx.call("history.toggle", json!({})).unwrap();
    assert_eq!(res, json!({"collapsed": true, "toggle": "▸"}));
    let res = fx.call("history.toggle", json!({})).unwrap();
    assert_eq!(res, json!({"collapsed": false, "toggle": "▾"}));
}

// ─── Mode ───

#[test]
fn test_mode_get_and_set() {
    let fx = setup();
    assert_eq!(fx.call("mode.get", json!({})).unwrap()["mode"], "text");
    fx.call("mode.set", json!({"mode": "tellraw"})).unwrap();
    assert_eq!(fx.call("mode.get", json!({})).unwrap()["mode"], "tellraw");
}

// ─── Preview ───

#[test]
fn test_preview_set_clamps_and_reports_transform() {
    let fx = setup();
    let res = fx
        .call(
            "preview.set",
            json!({"mode": "tellraw", "opacity": 250, "offset_x": -50, "offset_y": 10, "scale": 5}),
        )
        .unwrap();
    assert_eq!(res["opacity"], 100);
    assert_eq!(res["offset_x"], -50);
    assert_eq!(res["scale"], 10);
    assert_eq!(res["transform"], "translate(-50px, 10px) scale(0.1)");
    assert_eq!(res["tracks"]["offset_x"], 25.0);
    assert_eq!(res["tracks"]["scale"], 0.0);
    assert_eq!(res["opacity_fraction"], 1.0);
}

#[test]
fn test_preview_reset() {
    let fx = setup();
    fx.call("preview.set", json!({"mode": "text", "opacity": 30, "offset_y": 40}))
        .unwrap();
    let res = fx.call("preview.reset", json!({"mode": "text"})).unwrap();
    assert_eq!(res["offset_y"], 0);
    assert_eq!(res["opacity"], 30);
    assert_eq!(res["background_opacity"], 0.25);

    let other = fx.call("preview.get", json!({"mode": "tellraw"})).unwrap();
    assert_eq!(other["opacity"], 100);
    assert_eq!(other["background_opacity"], 1.0);
}

// ─── Settings ───

#[test]
fn test_settings_get() {
    let fx = setup();
    let res = fx.call("settings.get", json!({})).unwrap();
    assert_eq!(res["endpoint"]["base_url"], fx.endpoint.base_url.as_str());
    assert_eq!(res["endpoint"]["render_path"], "api/render");
    assert_eq!(res["logging"]["level"], "info");
}

#[test]
fn test_settings_set_endpoint_redirects_renders() {
    let fx = setup();
    let other = MockEndpoint::json_error(503, "Renderer offline");
    fx.call(
        "settings.set",
        json!({"key": "endpoint.base_url", "value": other.base_url}),
    )
    .unwrap();

    let err = fx
        .call("render.submit", json!({"mode": "text", "content": "x"}))
        .unwrap_err();
    assert_eq!(err, "Renderer offline");
    assert!(fx.endpoint.requests().is_empty());
    assert_eq!(other.requests().len(), 1);
}

#[test]
fn test_settings_set_invalid_key() {
    let fx = setup();
    let err = fx
        .call("settings.set", json!({"key": "nope.nothing", "value": 1}))
        .unwrap_err();
    assert!(err.contains("Invalid settings key"));
    assert_eq!(
        fx.call("settings.set", json!({"key": "logging.level"})).unwrap_err(),
        "missing value"
    );
}
