//! Capped, newest-first generation history.

use crate::core::types::{HistoryEntry, NewHistoryEntry};
use crate::storage::{KeyValueStore, Persisted};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Storage key for the history collection.
pub const HISTORY_KEY: &str = "contentHistory";

/// Maximum number of entries kept.
pub const HISTORY_CAP: usize = 50;

/// Repository over the persisted history list.
#[derive(Debug)]
pub struct HistoryRepository {
    entries: Persisted<Vec<HistoryEntry>>,
}

impl HistoryRepository {
    /// Open the history stored in `store`, or start empty.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut entries = Persisted::load(store, HISTORY_KEY, Vec::new());
        entries.fixup(|list| list.truncate(HISTORY_CAP));
        Self { entries }
    }

    /// All entries, newest first.
    #[must_use]
    pub fn list(&self) -> &[HistoryEntry] {
        self.entries.get()
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&HistoryEntry> {
        self.list().iter().find(|entry| entry.id == id)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Record a new entry at the front, evicting the oldest past the cap.
    ///
    /// Returns the stored entry with its assigned id and timestamp.
    pub fn add(&mut self, new: NewHistoryEntry) -> HistoryEntry {
        let now = Utc::now();
        // Ids follow the clock but stay strictly increasing within a millisecond
        let id = self
            .list()
            .first()
            .map_or(now.timestamp_millis(), |newest| {
                now.timestamp_millis().max(newest.id.saturating_add(1))
            });

        let entry = HistoryEntry {
            id,
            content_type: new.request.content_type,
            keyword: new.request.keyword,
            tone: new.request.tone,
            length: new.request.length,
            content: new.content,
            timestamp: now,
        };

        self.entries.update(|list| {
            list.insert(0, entry.clone());
            list.truncate(HISTORY_CAP);
        });
        debug!(id, total = self.len(), "history entry added");
        entry
    }

    /// Delete the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.entries.update(|list| list.retain(|entry| entry.id != id));
        true
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.update(Vec::clear);
    }
}
