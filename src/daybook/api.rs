//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all daybook operations, regardless of the UI
//! being used.
//!
//! The facade:
//! - **Loads** the journal once, before anything else touches it
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that lives in `commands/*.rs`),
//! I/O, and presentation concerns.
//!
//! `DaybookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `DaybookApi<FileStore>`
//! - Testing: `DaybookApi<InMemoryStore>`

use crate::commands;
use crate::error::{DaybookError, Result};
use crate::journal::Journal;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub struct DaybookApi<S: DataStore> {
    journal: Journal<S>,
    config_dir: PathBuf,
}

impl<S: DataStore> DaybookApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            journal: Journal::new(store),
            config_dir,
        }
    }

    /// Run the loader. Must be called once before any other operation; the
    /// result carries a warning when stored data had to be discarded.
    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let mut result = commands::CmdResult::default();
        if let Some(warning) = self.journal.load()? {
            result.add_message(warning);
        }
        Ok(result)
    }

    pub fn create_entry(
        &mut self,
        date: DateTime<Utc>,
        content: String,
        emotion_id: u8,
    ) -> Result<commands::CmdResult> {
        self.ensure_loaded()?;
        commands::create::run(&mut self.journal, date, content, emotion_id)
    }

    pub fn update_entry(
        &mut self,
        target_id: u64,
        date: DateTime<Utc>,
        content: String,
        emotion_id: u8,
    ) -> Result<commands::CmdResult> {
        self.ensure_loaded()?;
        commands::update::run(&mut self.journal, target_id, date, content, emotion_id)
    }

    pub fn delete_entry(&mut self, target_id: u64) -> Result<commands::CmdResult> {
        self.ensure_loaded()?;
        commands::delete::run(&mut self.journal, target_id)
    }

    pub fn list_entries(
        &self,
        sort: commands::list::SortOrder,
        emotion_id: Option<u8>,
    ) -> Result<commands::CmdResult> {
        self.ensure_loaded()?;
        commands::list::run(&self.journal, sort, emotion_id)
    }

    pub fn view_entry(&self, target_id: u64) -> Result<commands::CmdResult> {
        self.ensure_loaded()?;
        commands::view::run(&self.journal, target_id)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn data_path(&self) -> Result<commands::CmdResult> {
        Ok(commands::CmdResult::default().with_data_path(self.journal.store().data_path()))
    }

    fn ensure_loaded(&self) -> Result<()> {
        if !self.journal.is_loaded() {
            return Err(DaybookError::Api(
                "Diary accessed before load completed".to_string(),
            ));
        }
        Ok(())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::SortOrder;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
