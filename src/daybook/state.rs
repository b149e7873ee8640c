//! Actions, the reducer, and the id allocator.
//!
//! The entry list is only ever changed by running [`reduce`] over an
//! [`Action`]. The reducer is pure: it never mutates its input and always
//! returns a fresh `Vec`, so callers can rely on the old list staying intact
//! until they commit the new one.

use crate::model::Entry;

/// A tagged request to change the entry list.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the list wholesale (startup only).
    Init(Vec<Entry>),
    /// Prepend a new entry. The id must come from the [`IdAllocator`].
    Create(Entry),
    /// Replace the entry with the matching id by a full copy.
    Update(Entry),
    /// Remove the entry with the matching id.
    Delete(u64),
}

impl Action {
    /// Whether applying this action must be mirrored to durable storage.
    /// `Init` is loaded FROM storage, never written back.
    pub fn mutates_storage(&self) -> bool {
        !matches!(self, Action::Init(_))
    }
}

/// Compute the next entry list. Pure; no-match `Update`/`Delete` return the
/// state unchanged in value.
pub fn reduce(state: &[Entry], action: &Action) -> Vec<Entry> {
    match action {
        Action::Init(data) => data.clone(),
        Action::Create(entry) => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.push(entry.clone());
            next.extend_from_slice(state);
            next
        }
        Action::Update(entry) => state
            .iter()
            .map(|it| {
                if it.id == entry.id {
                    entry.clone()
                } else {
                    it.clone()
                }
            })
            .collect(),
        Action::Delete(target_id) => state
            .iter()
            .filter(|it| it.id != *target_id)
            .cloned()
            .collect(),
    }
}

/// Produces unique, monotonically increasing entry ids.
///
/// Seeded once at startup from the stored data; ids are never reused within
/// a process lifetime.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from loaded entries: max existing id + 1, or 0 when empty.
    /// Stored ids are external input; saturate instead of overflowing on a
    /// file that carries `u64::MAX`.
    pub fn seeded_from(entries: &[Entry]) -> Self {
        let next = entries
            .iter()
            .map(|e| e.id.saturating_add(1))
            .max()
            .unwrap_or(0);
        Self { next }
    }

    /// Hand out the next id and advance the counter.
    pub fn next(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Load lifecycle of the diary: one terminal transition, no re-loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    NotLoaded,
    Loaded,
}
