//! Render endpoint client for mcbe-preview.
//!
//! Sends `{mode, content}` as JSON to the configured endpoint and accepts
//! only a non-empty PNG body as success. There is no retry; a failed render
//! is retried by the user submitting again.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::types::errors::RenderError;
use crate::types::history::RenderMode;
use crate::types::render::{RenderErrorBody, RenderRequest, RenderedImage};
use crate::types::settings::EndpointSettings;

const GENERIC_FAILURE: &str = "Render request failed";
const EXPECTED_IMAGE_TYPE: &str = "image/png";

/// Builds the user-facing message for a non-success response.
///
/// JSON bodies contribute their `error` field; anything else contributes the
/// raw body text. Blank or unusable bodies fall back to a generic message.
pub fn failure_message(content_type: &str, body: &str) -> String {
    let message = if content_type.contains("application/json") {
        serde_json::from_str::<RenderErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
    } else {
        Some(body.to_string())
    };

    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

pub struct RenderClient {
    http: reqwest::Client,
    render_url: String,
}

impl RenderClient {
    /// Creates a client for the endpoint described by `settings`.
    pub fn new(settings: &EndpointSettings) -> Result<Self, RenderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RenderError::NetworkError(e.to_string()))?;

        Ok(Self {
            http,
            render_url: settings.render_url(),
        })
    }

    pub fn render_url(&self) -> &str {
        &self.render_url
    }

    /// Renders `content` and returns the PNG payload.
    pub async fn render(
        &self,
        mode: RenderMode,
        content: &str,
    ) -> Result<RenderedImage, RenderError> {
        let request = RenderRequest {
            mode,
            content: content.to_string(),
        };
        tracing::debug!(
            url = %self.render_url,
            %mode,
            len = content.len(),
            "sending render request"
        );

        let response = self
            .http
            .post(&self.render_url)
            .header(ACCEPT, "image/png, application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RenderError::NetworkError(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = failure_message(&content_type, &body);
            tracing::warn!(%status, %message, "render request rejected");
            return Err(RenderError::ServerError(message));
        }

        if !content_type.contains(EXPECTED_IMAGE_TYPE) {
            return Err(RenderError::WrongContentType(content_type));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RenderError::NetworkError(e.to_string()))?;
        if bytes.is_empty() {
            return Err(RenderError::EmptyImage);
        }

        tracing::debug!(bytes = bytes.len(), "render succeeded");
        Ok(RenderedImage {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}
