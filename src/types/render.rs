use serde::{Deserialize, Serialize};

use super::history::RenderMode;

/// JSON body posted to the render endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub mode: RenderMode,
    pub content: String,
}

/// Error body the render endpoint sends with a failure status.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderErrorBody {
    pub error: Option<String>,
}

/// Image payload returned by a successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    /// MIME type without parameters (`image/png; charset=x` → `image/png`).
    pub fn mime(&self) -> &str {
        self.content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
    }
}
