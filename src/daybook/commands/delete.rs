use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::store::DataStore;

/// Remove the entry with `target_id`. An unknown id is reported as a
/// warning, not an error.
pub fn run<S: DataStore>(journal: &mut Journal<S>, target_id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(entry) = journal.find_by_id(target_id).cloned() else {
        result.add_message(CmdMessage::warning(format!(
            "No entry with id #{}, nothing deleted",
            target_id
        )));
        return Ok(result);
    };

    journal.delete(target_id)?;

    result.add_message(CmdMessage::success(format!("Entry deleted (#{})", target_id)));
    result.affected_entries.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, MessageLevel};
    use crate::store::memory::InMemoryStore;
    use chrono::{DateTime, Utc};

    fn date_ms(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn deletes_the_matching_entry() {
        let mut journal = Journal::new(InMemoryStore::new());
        journal.load().unwrap();
        create::run(&mut journal, date_ms(0), "a".into(), 1).unwrap();
        create::run(&mut journal, date_ms(1), "b".into(), 2).unwrap();

        run(&mut journal, 0).unwrap();

        assert_eq!(journal.entries().len(), 1);
        assert!(journal.find_by_id(0).is_none());
    }

    #[test]
    fn unknown_id_warns_and_leaves_state_alone() {
        let mut journal = Journal::new(InMemoryStore::new());
        journal.load().unwrap();
        create::run(&mut journal, date_ms(0), "a".into(), 1).unwrap();

        let result = run(&mut journal, 42).unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(journal.entries().len(), 1);
    }
}
