use std::collections::HashSet;

use super::{normalize, EntryStore};
use crate::config::DedupConfig;
use crate::models::User;
use crate::Result;

/// What gets remembered for the first entry seen with a given URL.
///
/// Later URLs are always normalized before the lookup. With `RawUrl` the
/// remembered value is the URL exactly as stored, so a first-seen
/// `http://a.com/` never matches a later `http://a.com`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaselinePolicy {
    #[default]
    RawUrl,
    CanonicalUrl,
}

impl BaselinePolicy {
    pub fn from_config(config: &DedupConfig) -> Self {
        if config.compare_canonical {
            Self::CanonicalUrl
        } else {
            Self::RawUrl
        }
    }
}

/// Walks one user's entries and deletes the ones whose URL was already seen
pub struct DuplicateScanner<'a, S: ?Sized> {
    store: &'a S,
    policy: BaselinePolicy,
}

impl<'a, S: EntryStore + ?Sized> DuplicateScanner<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            policy: BaselinePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: BaselinePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Clean duplicates for a resolved user, returning how many were removed
    pub async fn clean_duplicates(&self, user: &User) -> Result<u32> {
        let duplicates = self.scan_and_clean(user.id).await?;
        tracing::info!(
            user = %user.username,
            duplicates,
            "Cleaned duplicates for user"
        );
        Ok(duplicates)
    }

    /// One scan pass over a user's entries.
    ///
    /// Each duplicate is deleted and committed before the next entry is
    /// looked at, and only counted once the commit succeeded. A storage
    /// error aborts the pass; deletions committed before it stay.
    pub async fn scan_and_clean(&self, user_id: i64) -> Result<u32> {
        let entries = self.store.find_ids_and_urls(user_id).await?;

        let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
        let mut duplicates = 0;

        for entry in entries {
            let canonical = normalize(&entry.url);

            if seen.contains(canonical) {
                if self.store.delete_and_commit(entry.id).await? {
                    duplicates += 1;
                    tracing::debug!(entry_id = entry.id, url = %entry.url, "Deleted duplicate entry");
                } else {
                    tracing::warn!(entry_id = entry.id, "Duplicate entry vanished before deletion");
                }
                continue;
            }

            let baseline = match self.policy {
                BaselinePolicy::CanonicalUrl => canonical.to_string(),
                BaselinePolicy::RawUrl => entry.url,
            };
            seen.insert(baseline);
        }

        Ok(duplicates)
    }
}
