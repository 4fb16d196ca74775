use serde::{Deserialize, Serialize};

/// One listing item as extracted from a page, before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub score: String,
    pub author: String,
    pub comments: String,
    pub rank: String,
}

/// The user-facing shape of an entry. Every value is emitted as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub uri: String,
    pub author: String,
    pub points: String,
    pub comments: String,
    pub rank: String,
}

impl From<Entry> for Record {
    fn from(entry: Entry) -> Self {
        Self {
            title: entry.title.replace('"', "'"),
            uri: entry.link,
            author: entry.author.replace('"', "''"),
            points: entry.score,
            comments: entry.comments,
            rank: entry.rank,
        }
    }
}
