//! Render history store for mcbe-preview.
//!
//! Keeps the most-recent-first list of render records, bounded to
//! [`HISTORY_CAPACITY`] entries with at most one entry per `(mode, content)`
//! pair. The full list is mirrored to the key-value store on every mutation,
//! and the injected [`HistoryObserver`] is told to redraw.

use crate::storage::{self, LoadOutcome, SharedStore, HISTORY_KEY};
use crate::types::errors::StorageError;
use crate::types::history::HistoryRecord;

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 30;

/// Presentation-layer callbacks fired by the history store.
pub trait HistoryObserver {
    /// The list changed; redraw it from `records`.
    fn on_list_changed(&mut self, records: &[HistoryRecord]);
    /// The user picked `record`; restore input and preview from it.
    fn on_item_selected(&mut self, index: usize, record: &HistoryRecord);
}

/// Headless observer for callers without a presentation layer.
impl HistoryObserver for () {
    fn on_list_changed(&mut self, _records: &[HistoryRecord]) {}
    fn on_item_selected(&mut self, _index: usize, _record: &HistoryRecord) {}
}

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    fn initialize(&mut self) -> LoadOutcome<usize>;
    fn upsert(&mut self, record: HistoryRecord);
    fn get(&self, index: usize) -> Option<&HistoryRecord>;
    fn select(&mut self, index: usize) -> Option<&HistoryRecord>;
    fn records(&self) -> &[HistoryRecord];
    fn flush(&self) -> Result<(), StorageError>;
}

/// Removes any record with the same `(mode, content)`, puts `record` in
/// front, then drops the tail beyond `capacity`.
pub fn apply_upsert(records: &mut Vec<HistoryRecord>, record: HistoryRecord, capacity: usize) {
    records.retain(|r| !r.same_input(&record));
    records.insert(0, record);
    records.truncate(capacity);
}

/// Restores both invariants on a list read from storage: the first
/// occurrence of each `(mode, content)` wins, and the tail is cut to `capacity`.
fn normalize(records: Vec<HistoryRecord>, capacity: usize) -> Vec<HistoryRecord> {
    let mut out: Vec<HistoryRecord> = Vec::with_capacity(records.len().min(capacity));
    for record in records {
        if out.len() == capacity {
            break;
        }
        if !out.iter().any(|r| r.same_input(&record)) {
            out.push(record);
        }
    }
    out
}

/// History store backed by a shared key-value store.
pub struct HistoryStore<O: HistoryObserver> {
    store: SharedStore,
    records: Vec<HistoryRecord>,
    observer: O,
}

impl<O: HistoryObserver> HistoryStore<O> {
    /// Creates an empty store. Call [`HistoryStoreTrait::initialize`] to
    /// rehydrate persisted records.
    pub fn new(store: SharedStore, observer: O) -> Self {
        Self {
            store,
            records: Vec::new(),
            observer,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Best-effort write; in-memory state stays authoritative on failure.
    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::warn!(error = %e, "cannot save history; keeping it in memory only");
        }
    }
}

impl<O: HistoryObserver> HistoryStoreTrait for HistoryStore<O> {
    /// Loads the persisted list. Missing or unreadable data leaves the
    /// history empty; the outcome is returned for callers that care which.
    fn initialize(&mut self) -> LoadOutcome<usize> {
        let outcome: LoadOutcome<Vec<HistoryRecord>> =
            storage::load_json(self.store.as_ref(), HISTORY_KEY);

        let result = match outcome {
            LoadOutcome::Loaded(records) => {
                let loaded = records.len();
                self.records = normalize(records, HISTORY_CAPACITY);
                if self.records.len() != loaded {
                    tracing::debug!(
                        stored = loaded,
                        kept = self.records.len(),
                        "normalized persisted history"
                    );
                }
                LoadOutcome::Loaded(self.records.len())
            }
            LoadOutcome::NotFound => {
                tracing::debug!("no persisted history");
                self.records.clear();
                LoadOutcome::NotFound
            }
            LoadOutcome::CorruptData(reason) => {
                tracing::warn!(%reason, "persisted history unreadable; starting empty");
                self.records.clear();
                LoadOutcome::CorruptData(reason)
            }
        };

        self.observer.on_list_changed(&self.records);
        result
    }

    fn upsert(&mut self, record: HistoryRecord) {
        apply_upsert(&mut self.records, record, HISTORY_CAPACITY);
        self.persist();
        self.observer.on_list_changed(&self.records);
    }

    fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    fn select(&mut self, index: usize) -> Option<&HistoryRecord> {
        let record = self.records.get(index)?;
        self.observer.on_item_selected(index, record);
        Some(record)
    }

    fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Writes the current list, surfacing the storage error.
    fn flush(&self) -> Result<(), StorageError> {
        storage::save_json(self.store.as_ref(), HISTORY_KEY, &self.records)
    }
}
