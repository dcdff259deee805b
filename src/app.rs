//! App Core for mcbe-preview.
//!
//! Central struct holding the history store, UI state, preview transforms,
//! render client and settings. It owns the submit and restore flows that the
//! outer shells (RPC server, CLI) call into.

use std::fs;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::database::Database;
use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::managers::preview_manager::{PreviewManager, PreviewManagerTrait};
use crate::managers::ui_state_manager::{UiStateManager, UiStateManagerTrait};
use crate::services::image_codec;
use crate::services::render_client::RenderClient;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::SharedStore;
use crate::types::errors::RenderError;
use crate::types::history::{HistoryRecord, RenderMode};
use crate::ui::error_notice::ErrorNotice;
use crate::ui::history_panel::HistoryPanel;

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Central application struct.
pub struct App {
    pub history: HistoryStore<HistoryPanel>,
    pub ui_state: UiStateManager,
    pub preview: PreviewManager,
    pub settings_engine: SettingsEngine,
    render_client: RenderClient,
    notice: Option<ErrorNotice>,
}

impl App {
    /// Creates an App over an already-loaded settings engine and an open store.
    ///
    /// Nothing is read from the store until [`App::startup`].
    pub fn new(
        settings_engine: SettingsEngine,
        store: SharedStore,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let render_client = RenderClient::new(&settings_engine.get_settings().endpoint)?;

        Ok(Self {
            history: HistoryStore::new(store.clone(), HistoryPanel::new()),
            ui_state: UiStateManager::new(store),
            preview: PreviewManager::new(),
            settings_engine,
            render_client,
            notice: None,
        })
    }

    /// Opens the SQLite store that `settings_engine` points at.
    ///
    /// The caller loads the settings first so logging can be configured from them.
    pub fn open(settings_engine: SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = settings_engine.database_path();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let db = Database::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "opened client store");

        Self::new(settings_engine, Arc::new(db))
    }

    /// Startup sequence: rehydrate history, restore panel state and mode.
    pub fn startup(&mut self) {
        self.history.initialize();
        self.ui_state.load();
        let collapsed = self.ui_state.history_ui().collapsed;
        self.history.observer_mut().set_collapsed(collapsed);
        tracing::info!(
            records = self.history.len(),
            mode = %self.ui_state.mode(),
            "client ready"
        );
    }

    /// Shutdown sequence: write the history one last time.
    pub fn shutdown(&self) {
        if let Err(e) = self.history.flush() {
            tracing::warn!(error = %e, "history not saved on shutdown");
        }
    }

    /// Submits `content` for rendering and records the result.
    ///
    /// The content is trimmed first; empty input is rejected without a
    /// request. Any failure is also posted as the current error notice, and
    /// leaves the history untouched.
    pub async fn submit(
        &mut self,
        mode: RenderMode,
        content: &str,
    ) -> Result<HistoryRecord, RenderError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(self.fail(RenderError::EmptyContent));
        }

        self.preview.show_placeholder_background(mode);
        let image = match self.render_client.render(mode, content).await {
            Ok(image) => image,
            Err(e) => return Err(self.fail(e)),
        };

        self.preview.show_slider_background(mode);

        let record = HistoryRecord::new(
            mode,
            content,
            image_codec::image_to_data_url(&image),
            now_millis(),
        );
        self.history.upsert(record.clone());
        Ok(record)
    }

    fn fail(&mut self, error: RenderError) -> RenderError {
        tracing::warn!(%error, "render failed");
        self.notice = Some(ErrorNotice::new(error.to_string()));
        error
    }

    /// Selects history entry `index` and returns it so the caller can restore
    /// the input and preview. The mode's offset and scale are reset; the
    /// checkerboard keeps following the opacity slider.
    pub fn restore(&mut self, index: usize) -> Option<HistoryRecord> {
        let record = self.history.select(index)?.clone();
        self.preview.reset_transform(record.mode);
        Some(record)
    }

    /// Clears the mode's preview transform, as a form reset does.
    pub fn reset_form(&mut self, mode: RenderMode) {
        self.preview.reset(mode);
    }

    pub fn switch_mode(&mut self, mode: RenderMode) {
        self.ui_state.set_mode(mode);
    }

    /// Flips the history panel and returns whether it is now collapsed.
    pub fn toggle_history_panel(&mut self) -> bool {
        let collapsed = self.ui_state.toggle_history_collapsed();
        self.history.observer_mut().set_collapsed(collapsed);
        collapsed
    }

    pub fn panel(&self) -> &HistoryPanel {
        self.history.observer()
    }

    /// Message of the current notice, if it has not expired or been dismissed.
    pub fn notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| n.is_visible())
            .map(|n| n.message())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Rebuilds the render client after endpoint settings changed.
    pub fn reload_render_client(&mut self) -> Result<(), RenderError> {
        self.render_client = RenderClient::new(&self.settings_engine.get_settings().endpoint)?;
        tracing::info!(url = self.render_client.render_url(), "render endpoint updated");
        Ok(())
    }

    pub fn render_url(&self) -> &str {
        self.render_client.render_url()
    }
}
