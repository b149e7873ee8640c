use crate::commands::CmdResult;
use crate::error::{DaybookError, Result};
use crate::journal::Journal;
use crate::store::DataStore;

pub fn run<S: DataStore>(journal: &Journal<S>, target_id: u64) -> Result<CmdResult> {
    let entry = journal
        .find_by_id(target_id)
        .cloned()
        .ok_or(DaybookError::EntryNotFound(target_id))?;
    Ok(CmdResult::default().with_listed_entries(vec![entry]))
}
