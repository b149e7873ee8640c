use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One diary record.
///
/// `date` is the user-assigned diary date (not the creation time) and is
/// serialized as epoch milliseconds, matching the on-disk layout. Entries are
/// value snapshots: an update replaces the whole entry, never patches fields
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(deserialize_with = "entry_id")]
    pub id: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub content: String,
    pub emotion_id: u8,
}

impl Entry {
    pub fn new(id: u64, date: DateTime<Utc>, content: String, emotion_id: u8) -> Self {
        Self {
            id,
            date,
            content,
            emotion_id,
        }
    }
}

/// Older data files carry ids as numeric strings. Normalize to `u64` here so
/// every comparison downstream is plain numeric equality.
fn entry_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
