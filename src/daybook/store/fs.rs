use super::DataStore;
use crate::error::{DaybookError, Result};
use crate::model::Entry;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the data file under the store root; the durable-storage
/// "key" the diary is mirrored to.
pub const DATA_FILENAME: &str = "diary.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(DaybookError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Entry>> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(DaybookError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(DaybookError::Serialization)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(entries).map_err(DaybookError::Serialization)?;
        fs::write(self.data_file(), content).map_err(DaybookError::Io)?;
        Ok(())
    }

    fn data_path(&self) -> Option<PathBuf> {
        Some(self.data_file())
    }
}
