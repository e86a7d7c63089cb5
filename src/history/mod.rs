//! Recently-used emoji log and its persistence.
//!
//! The log is stored as a single JSON array under `@<namespace>:HISTORY`,
//! most recent first, each entry being the emoji record plus a `count`.

use crate::emoji::EmojiRecord;
use crate::error::StorageError;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Namespace used when the host does not configure one.
pub const DEFAULT_NAMESPACE: &str = "react-native-emoji-selector";

/// Storage key for a namespace's history.
pub fn storage_key(namespace: &str) -> String {
    format!("@{}:HISTORY", namespace)
}

fn default_count() -> u32 {
    1
}

/// A single history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub emoji: EmojiRecord,
    /// Always recorded as 1; repeat selections do not bump it.
    #[serde(default = "default_count")]
    pub count: u32,
}

impl HistoryEntry {
    pub fn new(emoji: EmojiRecord) -> Self {
        Self { emoji, count: 1 }
    }
}

/// What a selection did to the history log.
#[derive(Debug)]
pub enum HistoryOutcome {
    /// History is turned off for this picker.
    Disabled,
    /// The emoji was already logged; nothing changed.
    Unchanged,
    /// The emoji was prepended and the log persisted.
    Recorded,
    /// The emoji was prepended in memory but persisting failed.
    WriteFailed(StorageError),
}

impl HistoryOutcome {
    /// Whether the in-memory log gained an entry.
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded | Self::WriteFailed(_))
    }
}

/// Most-recent-first log of selected emoji, unique by `unified`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from stored entries, dropping later duplicates.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries {
            if !log.contains(&entry.emoji.unified) {
                log.entries.push(entry);
            }
        }
        log
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Logged records, most recent first.
    pub fn records(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.entries.iter().map(|e| &e.emoji)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, unified: &str) -> bool {
        self.entries.iter().any(|e| e.emoji.unified == unified)
    }

    /// Prepend `record` unless it is already logged.
    ///
    /// Returns whether the log changed. A repeat selection neither moves
    /// the entry to the front nor increments its count.
    pub fn record(&mut self, record: &EmojiRecord) -> bool {
        if self.contains(&record.unified) {
            return false;
        }
        self.entries.insert(0, HistoryEntry::new(record.clone()));
        true
    }

    /// Load the log for `namespace`.
    ///
    /// A failed read or unparsable value is logged and treated as an empty
    /// history.
    pub async fn load<S: KeyValueStore>(store: &S, namespace: &str) -> Self {
        let key = storage_key(namespace);

        let raw = match store.get_item(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%key, "No stored history");
                return Self::new();
            }
            Err(e) => {
                warn!(%key, "Failed to read history, starting empty: {}", e);
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => {
                let log = Self::from_entries(entries);
                info!(count = log.len(), "Loaded emoji history");
                log
            }
            Err(e) => {
                warn!(%key, "Failed to parse history, starting empty: {}", e);
                Self::new()
            }
        }
    }

    /// Write the full log for `namespace`.
    pub async fn persist<S: KeyValueStore>(
        &self,
        store: &S,
        namespace: &str,
    ) -> Result<(), StorageError> {
        let key = storage_key(namespace);
        let value = serde_json::to_string(&self.entries).map_err(|source| {
            StorageError::Malformed {
                key: key.clone(),
                source,
            }
        })?;
        store.set_item(&key, value).await
    }

    /// Record `record` and persist the log if it changed.
    pub async fn append<S: KeyValueStore>(
        &mut self,
        store: &S,
        namespace: &str,
        record: &EmojiRecord,
    ) -> HistoryOutcome {
        if !self.record(record) {
            return HistoryOutcome::Unchanged;
        }

        match self.persist(store, namespace).await {
            Ok(()) => {
                debug!(unified = %record.unified, count = self.len(), "Recorded emoji in history");
                HistoryOutcome::Recorded
            }
            Err(e) => {
                warn!("Failed to persist emoji history: {}", e);
                HistoryOutcome::WriteFailed(e)
            }
        }
    }
}
