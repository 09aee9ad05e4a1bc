//! In-memory doubles for the dedup storage traits

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use chrono::Utc;

use super::{EntryStore, UserDirectory};
use crate::models::{EntryUrl, User};
use crate::{Error, Result};

fn injected_failure() -> Error {
    Error::Database(sqlx::Error::PoolTimedOut)
}

/// Entries keyed by owner, with optional failure injection
#[derive(Default)]
pub(crate) struct MemoryStore {
    entries: Mutex<BTreeMap<i64, Vec<EntryUrl>>>,
    deleted: Mutex<Vec<i64>>,
    failing_deletes: HashSet<i64>,
    failing_fetches: HashSet<i64>,
    vanished: HashSet<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(self, user_id: i64, entries: &[(i64, &str)]) -> Self {
        self.entries.lock().unwrap().insert(
            user_id,
            entries
                .iter()
                .map(|(id, url)| EntryUrl::new(*id, *url))
                .collect(),
        );
        self
    }

    /// Deleting this entry fails as if the commit did not go through
    pub fn fail_delete_of(mut self, entry_id: i64) -> Self {
        self.failing_deletes.insert(entry_id);
        self
    }

    /// Deleting this entry finds no row, as if another writer removed it
    pub fn vanish(mut self, entry_id: i64) -> Self {
        self.vanished.insert(entry_id);
        self
    }

    /// Fetching this user's entries fails
    pub fn fail_fetch_for(mut self, user_id: i64) -> Self {
        self.failing_fetches.insert(user_id);
        self
    }

    /// Ids deleted so far, in deletion order
    pub fn deleted(&self) -> Vec<i64> {
        self.deleted.lock().unwrap().clone()
    }

    /// Ids still present for a user
    pub fn remaining(&self, user_id: i64) -> Vec<i64> {
        self.entries
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|entries| entries.iter().map(|e| e.id).collect())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl EntryStore for MemoryStore {
    async fn find_ids_and_urls(&self, user_id: i64) -> Result<Vec<EntryUrl>> {
        if self.failing_fetches.contains(&user_id) {
            return Err(injected_failure());
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_and_commit(&self, entry_id: i64) -> Result<bool> {
        if self.failing_deletes.contains(&entry_id) {
            return Err(injected_failure());
        }
        if self.vanished.contains(&entry_id) {
            return Ok(false);
        }

        let mut entries = self.entries.lock().unwrap();
        for owned in entries.values_mut() {
            if let Some(pos) = owned.iter().position(|e| e.id == entry_id) {
                owned.remove(pos);
                self.deleted.lock().unwrap().push(entry_id);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Fixed list of users
#[derive(Default)]
pub(crate) struct MemoryDirectory {
    users: Vec<User>,
}

impl MemoryDirectory {
    pub fn new(names: &[(i64, &str)]) -> Self {
        Self {
            users: names
                .iter()
                .map(|(id, name)| User {
                    id: *id,
                    username: name.to_string(),
                    created_at: Utc::now(),
                })
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_by_username(&self, username: &str) -> Result<User> {
        self.users
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }
}
