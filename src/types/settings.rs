use serde::{Deserialize, Serialize};

/// Top-level client settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub endpoint: EndpointSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// Where and how render requests are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointSettings {
    pub base_url: String,
    /// Path relative to `base_url`.
    pub render_path: String,
    pub timeout_secs: u64,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            render_path: "api/render".to_string(),
            timeout_secs: 30,
        }
    }
}

impl EndpointSettings {
    /// Joins `base_url` and `render_path` with exactly one slash.
    pub fn render_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.render_path.trim_start_matches('/')
        )
    }
}

/// Durable storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// SQLite file path. `None` uses the platform data directory.
    pub database_path: Option<String>,
}

/// Log output settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
