use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

pub fn run<S: DataStore>(
    journal: &mut Journal<S>,
    date: DateTime<Utc>,
    content: String,
    emotion_id: u8,
) -> Result<CmdResult> {
    let entry = journal.create(date, content, emotion_id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry saved (#{})", entry.id)));
    result.affected_entries.push(entry);
    Ok(result)
}
