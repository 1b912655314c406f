//! The in-memory record of finished draws.
//!
//! Newest entries come first. The log lives as long as the session and is
//! only ever emptied as a whole.

pub mod export;

pub use export::ExportFormat;

use serde::{Deserialize, Serialize};

use co_core::{HistoryItem, SelectionMode};

/// Prepend-only list of past draws.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLog {
    entries: Vec<HistoryItem>,
}

impl SessionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished draw at the front.
    pub fn record(&mut self, item: HistoryItem) {
        self.entries.insert(0, item);
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryItem] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryItem> {
        self.entries.first()
    }

    /// Entries of one mode, newest first.
    pub fn by_mode(&self, mode: SelectionMode) -> impl Iterator<Item = &HistoryItem> {
        self.entries.iter().filter(move |item| item.mode == mode)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use co_core::{DrawOutcome, SeedBundle};

    use super::*;

    fn item(n: i64) -> HistoryItem {
        HistoryItem::new(
            SelectionMode::Numeric,
            DrawOutcome::Number(n),
            &SeedBundle::new(n as u32, 0.0),
            None,
            Utc::now(),
        )
    }

    #[test]
    fn empty_log() {
        let log = SessionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.latest().is_none());
    }

    #[test]
    fn newest_first() {
        let mut log = SessionLog::new();
        log.record(item(1));
        log.record(item(2));
        log.record(item(3));
        let results: Vec<_> = log.entries().iter().map(|i| i.result_text()).collect();
        assert_eq!(results, vec!["3", "2", "1"]);
        assert_eq!(log.latest().map(|i| i.result_text()).as_deref(), Some("3"));
    }

    #[test]
    fn filter_by_mode() {
        let mut log = SessionLog::new();
        log.record(item(7));
        log.record(HistoryItem::new(
            SelectionMode::Options,
            DrawOutcome::Choice("tea".to_string()),
            &SeedBundle::new(0, 0.0),
            None,
            Utc::now(),
        ));
        let numeric: Vec<_> = log
            .by_mode(SelectionMode::Numeric)
            .map(|i| i.result_text())
            .collect();
        assert_eq!(numeric, vec!["7"]);
        assert_eq!(log.by_mode(SelectionMode::Options).count(), 1);
        assert_eq!(log.by_mode(SelectionMode::Divination).count(), 0);
    }

    #[test]
    fn clear_empties() {
        let mut log = SessionLog::new();
        log.record(item(1));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut log = SessionLog::new();
        log.record(item(5));
        let json = serde_json::to_string(&log).unwrap();
        let back: SessionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.entries()[0], log.entries()[0]);
    }
}
