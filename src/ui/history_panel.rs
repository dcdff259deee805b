//! History panel view-model.
//!
//! Mirrors what the history list shows: one labelled entry per record, at
//! most one active entry, an empty state, and the collapse toggle.

use serde::Serialize;

use crate::managers::history_store::HistoryObserver;
use crate::types::history::{HistoryRecord, RenderMode};

/// Content longer than this many characters is cut in the label.
pub const LABEL_MAX_CHARS: usize = 40;
const ELLIPSIS: char = '…';

/// Returns `content` cut to `max_chars` characters with a trailing ellipsis
/// when it is longer.
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut short = content[..byte_idx].to_string();
            short.push(ELLIPSIS);
            short
        }
        None => content.to_string(),
    }
}

/// `<mode label> — <short content>`
pub fn entry_label(record: &HistoryRecord) -> String {
    format!(
        "{} — {}",
        record.mode.label(),
        truncate_content(&record.content, LABEL_MAX_CHARS)
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryListItem {
    pub index: usize,
    pub mode: RenderMode,
    pub label: String,
    /// Full untruncated content.
    pub tooltip: String,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct HistoryPanel {
    items: Vec<HistoryListItem>,
    active: Option<usize>,
    collapsed: bool,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[HistoryListItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Glyph shown on the collapse toggle.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.collapsed {
            "▸"
        } else {
            "▾"
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.collapsed {
            "false"
        } else {
            "true"
        }
    }
}

impl HistoryObserver for HistoryPanel {
    /// Rebuilds every entry; the active mark does not survive a redraw.
    fn on_list_changed(&mut self, records: &[HistoryRecord]) {
        self.active = None;
        self.items = records
            .iter()
            .enumerate()
            .map(|(index, record)| HistoryListItem {
                index,
                mode: record.mode,
                label: entry_label(record),
                tooltip: record.content.clone(),
                active: false,
            })
            .collect();
    }

    fn on_item_selected(&mut self, index: usize, _record: &HistoryRecord) {
        for item in &mut self.items {
            item.active = item.index == index;
        }
        self.active = self.items.iter().position(|i| i.active);
    }
}
