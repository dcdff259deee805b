use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which input channel produced a render.
///
/// The structured channel is spelled `tellraw` on the wire and in storage,
/// since that is the only other mode the render endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RenderMode {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "tellraw", alias = "structured")]
    Structured,
}

impl RenderMode {
    /// Value sent to the render endpoint and written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Text => "text",
            RenderMode::Structured => "tellraw",
        }
    }

    /// Short label shown in front of each history entry.
    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Text => "Text",
            RenderMode::Structured => "JSON",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(RenderMode::Text),
            "tellraw" | "structured" => Ok(RenderMode::Structured),
            other => Err(format!("Mode must be 'text' or 'tellraw', got '{}'", other)),
        }
    }
}

/// One persisted render attempt.
///
/// The legacy names are aliases, so an object carrying both the current and
/// the legacy name of a field is a duplicate field and fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub mode: RenderMode,
    /// Exact trimmed input that was submitted.
    pub content: String,
    /// Self-contained `data:` URL of the rendered image.
    #[serde(rename = "dataUrl", alias = "renderedImage")]
    pub rendered_image: String,
    /// Creation time in milliseconds since the UNIX epoch.
    #[serde(rename = "time", alias = "timestamp")]
    pub timestamp: i64,
}

impl HistoryRecord {
    pub fn new(
        mode: RenderMode,
        content: impl Into<String>,
        rendered_image: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            mode,
            content: content.into(),
            rendered_image: rendered_image.into(),
            timestamp,
        }
    }

    /// Returns true when both records describe the same `(mode, content)` pair.
    pub fn same_input(&self, other: &HistoryRecord) -> bool {
        self.mode == other.mode && self.content == other.content
    }
}

/// Collapsed/expanded flag of the history panel, persisted on its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HistoryUiState {
    pub collapsed: bool,
}
