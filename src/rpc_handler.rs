//! RPC method handler for the mcbe-preview JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the `App`; the one async call
//! (`render.submit`) is driven to completion on the provided runtime.

use std::str::FromStr;
use std::sync::Mutex;

use serde_json::{json, Value};
use tokio::runtime::Runtime;

use crate::app::App;
use crate::managers::history_store::HistoryStoreTrait;
use crate::managers::preview_manager::{PreviewManager, PreviewManagerTrait};
use crate::managers::ui_state_manager::UiStateManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::history::RenderMode;
use crate::types::preview::Axis;

fn param_str<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn param_index(params: &Value) -> Result<usize, String> {
    params
        .get("index")
        .and_then(|v| v.as_u64())
        .map(|i| i as usize)
        .ok_or_else(|| "missing index".to_string())
}

fn param_mode(params: &Value) -> Result<RenderMode, String> {
    RenderMode::from_str(param_str(params, "mode")?)
}

fn param_i32(params: &Value, name: &str) -> Option<i32> {
    params
        .get(name)
        .and_then(|v| v.as_i64())
        .map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

fn preview_json(app: &App, mode: RenderMode) -> Value {
    let state = app.preview.state(mode);
    json!({
        "mode": mode,
        "opacity": state.opacity,
        "offset_x": state.offset_x,
        "offset_y": state.offset_y,
        "scale": state.scale,
        "opacity_fraction": app.preview.opacity_fraction(mode),
        "background_opacity": app.preview.background_opacity(mode),
        "transform": app.preview.transform_css(mode),
        "tracks": {
            "opacity": PreviewManager::opacity_track_percent(state.opacity),
            "offset_x": PreviewManager::offset_track_percent(state.offset_x),
            "offset_y": PreviewManager::offset_track_percent(state.offset_y),
            "scale": PreviewManager::scale_track_percent(state.scale),
        }
    })
}

fn panel_json(app: &App) -> Value {
    let panel = app.panel();
    json!({
        "items": panel.items(),
        "empty": panel.is_empty(),
        "active": panel.active_index(),
        "collapsed": panel.is_collapsed(),
        "toggle": panel.toggle_glyph(),
        "aria_expanded": panel.aria_expanded(),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(
    app: &Mutex<App>,
    runtime: &Runtime,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Render ───
        "render.submit" => {
            let mode = param_mode(params)?;
            let content = param_str(params, "content")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let record = runtime
                .block_on(a.submit(mode, content))
                .map_err(|e| e.to_string())?;
            Ok(json!({"record": record, "history": panel_json(&a)}))
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(panel_json(&a))
        }
        "history.get" => {
            let index = param_index(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let record = a
                .history
                .get(index)
                .ok_or_else(|| format!("history entry not found: {}", index))?;
            serde_json::to_value(record).map_err(|e| e.to_string())
        }
        "history.select" => {
            let index = param_index(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let record = a
                .restore(index)
                .ok_or_else(|| format!("history entry not found: {}", index))?;
            let preview = preview_json(&a, record.mode);
            Ok(json!({"record": record, "preview": preview, "active": a.panel().active_index()}))
        }
        "history.toggle" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let collapsed = a.toggle_history_panel();
            Ok(json!({"collapsed": collapsed, "toggle": a.panel().toggle_glyph()}))
        }

        // ─── Mode ───
        "mode.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"mode": a.ui_state.mode()}))
        }
        "mode.set" => {
            let mode = param_mode(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.switch_mode(mode);
            Ok(json!({"mode": mode}))
        }

        // ─── Preview ───
        "preview.get" => {
            let mode = param_mode(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(preview_json(&a, mode))
        }
        "preview.set" => {
            let mode = param_mode(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if let Some(v) = param_i32(params, "opacity") {
                a.preview.set_opacity(mode, v);
            }
            if let Some(v) = param_i32(params, "offset_x") {
                a.preview.set_offset(mode, Axis::X, v);
            }
            if let Some(v) = param_i32(params, "offset_y") {
                a.preview.set_offset(mode, Axis::Y, v);
            }
            if let Some(v) = param_i32(params, "scale") {
                a.preview.set_scale(mode, v);
            }
            Ok(preview_json(&a, mode))
        }
        "preview.reset" => {
            let mode = param_mode(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.reset_form(mode);
            Ok(preview_json(&a, mode))
        }

        // ─── Notice ───
        "notice.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"message": a.notice()}))
        }
        "notice.dismiss" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.dismiss_notice();
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = param_str(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            if key.starts_with("endpoint.") {
                a.reload_render_client().map_err(|e| e.to_string())?;
            }
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
