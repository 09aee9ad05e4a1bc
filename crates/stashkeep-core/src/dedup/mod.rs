//! Duplicate entry cleanup
//!
//! Entries are compared by a lightly normalized URL. The first entry seen for
//! a URL is kept; every later match is deleted and committed on the spot, so
//! an interrupted run never loses work it already did.

mod normalize;
mod scanner;
mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use normalize::normalize;
pub use scanner::{BaselinePolicy, DuplicateScanner};
pub use tasks::{clean_all_users, clean_user_by_name, CleanEvent, CleanSummary, UserCleanReport};

use crate::models::{EntryUrl, User};
use crate::Result;

/// Where users come from
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user by name; fails with `Error::UserNotFound` if unknown
    async fn find_by_username(&self, username: &str) -> Result<User>;

    /// Every user, in a stable order
    async fn find_all(&self) -> Result<Vec<User>>;
}

/// Entry storage as seen by the duplicate scanner
#[async_trait::async_trait]
pub trait EntryStore: Send + Sync {
    /// `(id, url)` of every entry owned by `user_id`, in retrieval order
    async fn find_ids_and_urls(&self, user_id: i64) -> Result<Vec<EntryUrl>>;

    /// Delete one entry and durably commit the deletion before returning.
    /// Returns false if the entry no longer existed.
    async fn delete_and_commit(&self, entry_id: i64) -> Result<bool>;
}
