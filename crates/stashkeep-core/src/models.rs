use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account owning a set of stored entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Lightweight projection of a stored entry: just what duplicate
/// detection needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryUrl {
    pub id: i64,
    pub url: String,
}

impl EntryUrl {
    pub fn new(id: i64, url: impl Into<String>) -> Self {
        Self { id, url: url.into() }
    }
}
