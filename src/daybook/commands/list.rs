use crate::commands::CmdResult;
use crate::error::Result;
use crate::journal::Journal;
use crate::store::DataStore;

/// Sort order for listings, by the user-assigned diary date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Latest,
    Oldest,
}

pub fn run<S: DataStore>(
    journal: &Journal<S>,
    sort: SortOrder,
    emotion_id: Option<u8>,
) -> Result<CmdResult> {
    let mut listed: Vec<_> = journal
        .entries()
        .iter()
        .filter(|e| emotion_id.is_none_or(|wanted| e.emotion_id == wanted))
        .cloned()
        .collect();

    match sort {
        SortOrder::Latest => listed.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => listed.sort_by(|a, b| a.date.cmp(&b.date)),
    }

    Ok(CmdResult::default().with_listed_entries(listed))
}
