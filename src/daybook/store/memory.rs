use super::DataStore;
use crate::error::Result;
use crate::model::Entry;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<Entry>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, as if a previous process had written `entries`.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { entries, saves: 0 }
    }

    /// How many times `save` has been called. Lets tests assert which
    /// actions mirror to storage.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn data_path(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::DateTime;

    /// A store pre-filled with `count` entries, ids 0..count, newest first.
    pub fn store_with_entries(count: u64) -> InMemoryStore {
        let entries: Vec<Entry> = (0..count)
            .rev()
            .map(|i| {
                Entry::new(
                    i,
                    DateTime::from_timestamp_millis(1_700_000_000_000 + i as i64).unwrap(),
                    format!("Entry {}", i),
                    (i % 5 + 1) as u8,
                )
            })
            .collect();
        InMemoryStore::with_entries(entries)
    }
}
