//! Transient, dismissible error message.

use std::time::{Duration, Instant};

/// How long a notice stays visible unless dismissed earlier.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ErrorNotice {
    message: String,
    shown_at: Instant,
}

impl ErrorNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self::shown_at(message, Instant::now())
    }

    pub fn shown_at(message: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < NOTICE_TTL
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}
