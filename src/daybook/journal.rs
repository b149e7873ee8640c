//! The `Journal` owns the canonical in-memory entry list and mirrors every
//! mutation to durable storage.
//!
//! Storage is read exactly once, by [`Journal::load`]; afterwards the
//! in-memory list is the single source of truth and every mutating action
//! overwrites the stored data wholesale. A failed write leaves the in-memory
//! state untouched.

use crate::commands::CmdMessage;
use crate::error::{DaybookError, Result};
use crate::model::Entry;
use crate::state::{reduce, Action, IdAllocator, LoadStatus};
use crate::store::DataStore;
use chrono::{DateTime, Utc};

pub struct Journal<S: DataStore> {
    store: S,
    entries: Vec<Entry>,
    allocator: IdAllocator,
    status: LoadStatus,
}

impl<S: DataStore> Journal<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
            allocator: IdAllocator::new(),
            status: LoadStatus::NotLoaded,
        }
    }

    /// Read durable storage, sort descending by id, seed the allocator from
    /// the maximum id, and initialize the entry list.
    ///
    /// Runs once; later calls are no-ops. Unreadable stored data is recovered
    /// as an empty diary and reported through the returned warning — the file
    /// on disk is only overwritten by the next mutating action.
    pub fn load(&mut self) -> Result<Option<CmdMessage>> {
        if self.status == LoadStatus::Loaded {
            return Ok(None);
        }

        let (mut loaded, warning) = match self.store.load() {
            Ok(entries) => (entries, None),
            Err(DaybookError::Serialization(e)) => (
                Vec::new(),
                Some(CmdMessage::warning(format!(
                    "Stored diary data is unreadable, starting empty: {}",
                    e
                ))),
            ),
            Err(e) => return Err(e),
        };

        loaded.sort_by(|a, b| b.id.cmp(&a.id));
        self.allocator = IdAllocator::seeded_from(&loaded);
        self.entries = reduce(&self.entries, &Action::Init(loaded));
        self.status = LoadStatus::Loaded;
        Ok(warning)
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    /// Run the reducer and, for mutating actions, mirror the result to
    /// storage before committing it in memory.
    fn dispatch(&mut self, action: Action) -> Result<()> {
        let next = reduce(&self.entries, &action);
        if action.mutates_storage() {
            self.store.save(&next)?;
        }
        self.entries = next;
        Ok(())
    }

    /// Create a new entry with an allocator-issued id and prepend it.
    pub fn create(
        &mut self,
        date: DateTime<Utc>,
        content: String,
        emotion_id: u8,
    ) -> Result<Entry> {
        let entry = Entry::new(self.allocator.next(), date, content, emotion_id);
        self.dispatch(Action::Create(entry.clone()))?;
        Ok(entry)
    }

    /// Replace the entry with `entry.id` by a full copy. No-match is a
    /// silent no-op.
    pub fn update(&mut self, entry: Entry) -> Result<()> {
        self.dispatch(Action::Update(entry))
    }

    /// Remove the entry with the given id. No-match is a silent no-op.
    pub fn delete(&mut self, target_id: u64) -> Result<()> {
        self.dispatch(Action::Delete(target_id))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    fn date_ms(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    /// Store whose writes can be made to fail from outside the journal.
    struct FlakyStore {
        inner: InMemoryStore,
        fail_saves: Rc<Cell<bool>>,
    }

    impl FlakyStore {
        fn new() -> (Self, Rc<Cell<bool>>) {
            let fail_saves = Rc::new(Cell::new(false));
            let store = Self {
                inner: InMemoryStore::new(),
                fail_saves: Rc::clone(&fail_saves),
            };
            (store, fail_saves)
        }
    }

    impl DataStore for FlakyStore {
        fn load(&self) -> Result<Vec<Entry>> {
            self.inner.load()
        }

        fn save(&mut self, entries: &[Entry]) -> Result<()> {
            if self.fail_saves.get() {
                return Err(DaybookError::Io(std::io::Error::other("disk full")));
            }
            self.inner.save(entries)
        }

        fn data_path(&self) -> Option<std::path::PathBuf> {
            None
        }
    }

    fn loaded_journal(store: InMemoryStore) -> Journal<InMemoryStore> {
        let mut journal = Journal::new(store);
        journal.load().unwrap();
        journal
    }

    #[test]
    fn load_of_empty_storage_yields_empty_loaded_diary() {
        let journal = loaded_journal(InMemoryStore::new());
        assert!(journal.is_loaded());
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn load_sorts_descending_by_id_and_seeds_allocator() {
        let store = InMemoryStore::with_entries(vec![
            Entry::new(2, date_ms(30), "c".into(), 1),
            Entry::new(5, date_ms(10), "f".into(), 1),
            Entry::new(0, date_ms(20), "a".into(), 1),
        ]);
        let mut journal = loaded_journal(store);

        let ids: Vec<u64> = journal.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 2, 0]);

        // Next create must get max id + 1.
        let created = journal.create(date_ms(40), "g".into(), 2).unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn load_runs_only_once() {
        let mut journal = Journal::new(InMemoryStore::new());
        journal.load().unwrap();
        journal.create(date_ms(0), "kept".into(), 1).unwrap();
        journal.load().unwrap();
        assert_eq!(journal.entries().len(), 1);
    }

    #[test]
    fn first_create_on_fresh_diary_gets_id_zero() {
        let mut journal = loaded_journal(InMemoryStore::new());
        let first = journal
            .create(date_ms(1_704_067_200_000), "hello".into(), 2)
            .unwrap();
        assert_eq!(first.id, 0);
        assert_eq!(first.content, "hello");
        assert_eq!(first.emotion_id, 2);
        assert_eq!(journal.entries()[0], first);

        let second = journal.create(date_ms(1_704_153_600_000), "again".into(), 4).unwrap();
        assert_eq!(second.id, 1);
        assert_eq!(journal.entries()[0], second);
        assert_eq!(journal.entries().len(), 2);
    }

    #[test]
    fn mutations_mirror_the_full_list_to_storage() {
        let mut journal = loaded_journal(InMemoryStore::new());
        journal.create(date_ms(0), "a".into(), 1).unwrap();
        journal.create(date_ms(1), "b".into(), 2).unwrap();

        let stored = journal.store().load().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].content, "b");
    }

    #[test]
    fn init_is_not_written_back_to_storage() {
        let store = InMemoryStore::with_entries(vec![Entry::new(0, date_ms(0), "a".into(), 1)]);
        let journal = loaded_journal(store);
        assert_eq!(journal.store().save_count(), 0);
    }

    #[test]
    fn delete_of_last_entry_leaves_empty_state() {
        let store = InMemoryStore::with_entries(vec![Entry::new(5, date_ms(0), "x".into(), 1)]);
        let mut journal = loaded_journal(store);
        journal.delete(5).unwrap();
        assert!(journal.entries().is_empty());
        assert!(journal.store().load().unwrap().is_empty());
    }

    #[test]
    fn update_replaces_the_whole_entry() {
        let store = InMemoryStore::with_entries(vec![Entry::new(5, date_ms(0), "a".into(), 3)]);
        let mut journal = loaded_journal(store);
        let replacement = Entry::new(5, date_ms(7), "b".into(), 1);
        journal.update(replacement.clone()).unwrap();
        assert_eq!(journal.entries(), &[replacement]);
    }

    #[test]
    fn failed_write_leaves_in_memory_state_untouched() {
        let (store, fail_saves) = FlakyStore::new();
        let mut journal = Journal::new(store);
        journal.load().unwrap();
        journal.create(date_ms(0), "kept".into(), 1).unwrap();
        let before = journal.entries().to_vec();

        fail_saves.set(true);
        assert!(journal.create(date_ms(1), "lost".into(), 2).is_err());
        assert_eq!(journal.entries(), before.as_slice());

        let replacement = Entry::new(0, date_ms(9), "changed".into(), 5);
        assert!(journal.update(replacement).is_err());
        assert_eq!(journal.entries(), before.as_slice());

        assert!(journal.delete(0).is_err());
        assert_eq!(journal.entries(), before.as_slice());

        // The failed create still consumed id 1; the next one gets id 2.
        fail_saves.set(false);
        let next = journal.create(date_ms(2), "after".into(), 3).unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn find_by_id_returns_absent_for_unknown_ids() {
        let mut journal = loaded_journal(InMemoryStore::new());
        let entry = journal.create(date_ms(0), "a".into(), 1).unwrap();
        assert_eq!(journal.find_by_id(entry.id), Some(&entry));
        assert!(journal.find_by_id(999).is_none());
    }
}
