//! Bounded calculation history with durable storage.
//!
//! The log keeps the ten most recent calculations, newest first. It is
//! persisted as a whole after every append and rehydrated as a whole at
//! startup; a stored value that fails to parse rehydrates as empty.

use crate::types::{HistoryEntry, HistoryLog};
use crate::{storage, Result};
use std::path::Path;

/// Maximum number of entries retained in the log
pub const MAX_ENTRIES: usize = 10;

impl HistoryLog {
    /// Prepend `entry`, dropping anything beyond the cap.
    ///
    /// Pure with respect to `self`: the caller owns replacing its log with
    /// the returned one.
    pub fn append(&self, entry: HistoryEntry) -> HistoryLog {
        let mut entries = Vec::with_capacity((self.0.len() + 1).min(MAX_ENTRIES));
        entries.push(entry);
        entries.extend(self.0.iter().take(MAX_ENTRIES - 1).cloned());
        HistoryLog(entries)
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load the persisted log.
    ///
    /// Returns the empty log if nothing is stored or the stored value
    /// fails to parse; a parse failure is logged and swallowed, never
    /// propagated.
    pub fn load(path: &Path) -> Self {
        storage::load_or_default(path)
    }

    /// Serialize the full log and write it out, overwriting any previous
    /// value. Called after every append.
    pub fn save(&self, path: &Path) -> Result<()> {
        storage::save_atomic(path, self)?;
        tracing::debug!("Saved {} history entries to {:?}", self.0.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(bmi: f64, weight: f64) -> HistoryEntry {
        HistoryEntry {
            bmi,
            height: 170.0,
            weight,
            date: "1/15/2024".into(),
        }
    }

    #[test]
    fn test_append_prepends() {
        let log = HistoryLog::default();
        let log = log.append(entry(22.0, 64.0));
        let log = log.append(entry(24.2, 70.0));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].bmi, 24.2);
        assert_eq!(log.entries()[1].bmi, 22.0);
    }

    #[test]
    fn test_append_is_pure() {
        let log = HistoryLog::default().append(entry(22.0, 64.0));
        let _ = log.append(entry(24.2, 70.0));

        // The original log is untouched
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].bmi, 22.0);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut log = HistoryLog::default();
        for i in 0..11 {
            log = log.append(entry(20.0 + i as f64 / 10.0, 60.0 + i as f64));
        }

        assert_eq!(log.len(), MAX_ENTRIES);
        // Newest first: the 11th append leads
        assert_eq!(log.entries()[0].weight, 70.0);
        // The very first append (weight 60.0) fell off the end
        assert!(log.entries().iter().all(|e| e.weight != 60.0));
        assert_eq!(log.entries()[MAX_ENTRIES - 1].weight, 61.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("history.json");

        let log = HistoryLog::default()
            .append(entry(22.0, 64.0))
            .append(entry(24.2, 70.0));
        log.save(&path).unwrap();

        let loaded = HistoryLog::load(&path);
        assert_eq!(loaded, log);
    }

    #[test]
    fn test_empty_log_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("history.json");

        let log = HistoryLog::default();
        log.save(&path).unwrap();

        assert_eq!(HistoryLog::load(&path), log);
    }

    #[test]
    fn test_load_missing_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(HistoryLog::load(&path).is_empty());
    }

    #[test]
    fn test_load_corrupt_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::write(&path, "{ not an array }").unwrap();

        assert!(HistoryLog::load(&path).is_empty());
    }

    #[test]
    fn test_persisted_format_is_plain_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("history.json");

        HistoryLog::default()
            .append(entry(24.2, 70.0))
            .save(&path)
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = parsed.as_array().expect("history persists as an array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["bmi"], 24.2);
        assert_eq!(array[0]["height"], 170.0);
        assert_eq!(array[0]["weight"], 70.0);
        assert!(array[0]["date"].is_string());
    }
}
