//! # Storage Layer
//!
//! This module defines the storage abstraction for daybook. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Access pattern
//!
//! The [`crate::journal::Journal`] reads storage exactly once at startup and
//! mirrors every mutation back as a **full overwrite** of the entry list.
//! There are no partial or incremental writes; implementations only need to
//! round-trip a whole `Vec<Entry>`.
//!
//! ## Storage Format
//!
//! For `FileStore`, everything lives under one root directory:
//! ```text
//! <data dir>/
//! ├── diary.json          # The full entry list (JSON array)
//! └── config.json         # CLI configuration
//! ```

use crate::error::Result;
use crate::model::Entry;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for diary storage.
pub trait DataStore {
    /// Read the full entry list. Absent backing data yields an empty list;
    /// unreadable data is a `Serialization` error (recovery policy is the
    /// caller's concern).
    fn load(&self) -> Result<Vec<Entry>>;

    /// Overwrite the stored entry list wholesale.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;

    /// Location of the backing data, for diagnostics (file-based stores).
    fn data_path(&self) -> Option<PathBuf>;
}
