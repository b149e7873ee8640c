use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::Entry;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

/// Replace the entry with `target_id` by a whole new snapshot. An unknown id
/// is reported as a warning, not an error.
pub fn run<S: DataStore>(
    journal: &mut Journal<S>,
    target_id: u64,
    date: DateTime<Utc>,
    content: String,
    emotion_id: u8,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if journal.find_by_id(target_id).is_none() {
        result.add_message(CmdMessage::warning(format!(
            "No entry with id #{}, nothing updated",
            target_id
        )));
        return Ok(result);
    }

    let entry = Entry::new(target_id, date, content, emotion_id);
    journal.update(entry.clone())?;

    result.add_message(CmdMessage::success(format!("Entry updated (#{})", target_id)));
    result.affected_entries.push(entry);
    Ok(result)
}
