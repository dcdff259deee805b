//! UI State Manager for mcbe-preview.
//!
//! Persists the history panel's collapsed flag and the last-selected input
//! mode. Both are independent of the history list itself and, like it, are
//! best-effort: unreadable values fall back to defaults and failed writes are
//! only logged.

use std::str::FromStr;

use crate::storage::{self, LoadOutcome, SharedStore, HISTORY_UI_KEY, MODE_KEY};
use crate::types::history::{HistoryUiState, RenderMode};

/// Trait defining UI state operations.
pub trait UiStateManagerTrait {
    fn load(&mut self);
    fn history_ui(&self) -> HistoryUiState;
    fn set_history_collapsed(&mut self, collapsed: bool);
    fn toggle_history_collapsed(&mut self) -> bool;
    fn mode(&self) -> RenderMode;
    fn set_mode(&mut self, mode: RenderMode);
}

pub struct UiStateManager {
    store: SharedStore,
    history_ui: HistoryUiState,
    mode: RenderMode,
}

impl UiStateManager {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            history_ui: HistoryUiState::default(),
            mode: RenderMode::default(),
        }
    }

    fn load_mode(&self) -> RenderMode {
        match self.store.get_item(MODE_KEY) {
            Ok(Some(raw)) => RenderMode::from_str(raw.trim()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored mode invalid; using text");
                RenderMode::default()
            }),
            Ok(None) => RenderMode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "cannot read stored mode");
                RenderMode::default()
            }
        }
    }
}

impl UiStateManagerTrait for UiStateManager {
    /// Reads both values from storage, falling back to defaults.
    fn load(&mut self) {
        self.history_ui = match storage::load_json(self.store.as_ref(), HISTORY_UI_KEY) {
            LoadOutcome::Loaded(state) => state,
            LoadOutcome::NotFound => HistoryUiState::default(),
            LoadOutcome::CorruptData(reason) => {
                tracing::warn!(%reason, "history panel state unreadable; expanding panel");
                HistoryUiState::default()
            }
        };
        self.mode = self.load_mode();
    }

    fn history_ui(&self) -> HistoryUiState {
        self.history_ui
    }

    fn set_history_collapsed(&mut self, collapsed: bool) {
        self.history_ui.collapsed = collapsed;
        if let Err(e) = storage::save_json(self.store.as_ref(), HISTORY_UI_KEY, &self.history_ui) {
            tracing::warn!(error = %e, "cannot save history panel state");
        }
    }

    /// Flips the collapsed flag and returns the new value.
    fn toggle_history_collapsed(&mut self) -> bool {
        let collapsed = !self.history_ui.collapsed;
        self.set_history_collapsed(collapsed);
        collapsed
    }

    fn mode(&self) -> RenderMode {
        self.mode
    }

    fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
        if let Err(e) = self.store.set_item(MODE_KEY, mode.as_str()) {
            tracing::warn!(error = %e, "cannot save selected mode");
        }
    }
}
