//! mcbe-preview RPC Server — JSON-RPC over stdin/stdout for UI shells.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"render.submit", "params":{"mode":"text","content":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr. `MCBE_PREVIEW_CONFIG` points at an alternative config file.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use mcbe_preview::app::App;
use mcbe_preview::logging;
use mcbe_preview::rpc_handler::handle_method;
use mcbe_preview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

use serde_json::{json, Value};

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(std::env::var("MCBE_PREVIEW_CONFIG").ok());
    let loaded = settings_engine.load();
    logging::init(&settings_engine.get_settings().logging.level);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "using default settings");
    }

    let mut app = App::open(settings_engine)?;
    app.startup();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_line(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}))?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_line(&mut out, &json!({"id":null,"error":format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        tracing::debug!(%id, method, "rpc request");

        let response = match handle_method(&app, &runtime, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        write_line(&mut out, &response)?;
    }

    if let Ok(a) = app.lock() {
        a.shutdown();
    }
    Ok(())
}
