use super::{DuplicateScanner, EntryStore, UserDirectory};
use crate::models::User;
use crate::Result;

/// Progress notifications emitted while cleaning
#[derive(Debug, Clone, Copy)]
pub enum CleanEvent<'a> {
    /// An all-users run is about to process this many accounts
    Started { user_count: usize },
    /// A user's scan pass is starting
    UserStarted { user: &'a User },
    /// A user's scan pass finished
    UserFinished { user: &'a User, duplicates: u32 },
}

/// Outcome of one user's scan pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCleanReport {
    pub username: String,
    pub duplicates: u32,
}

/// Outcome of an all-users run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub users: Vec<UserCleanReport>,
}

impl CleanSummary {
    /// Duplicates removed across every user
    pub fn total(&self) -> u32 {
        self.users.iter().map(|u| u.duplicates).sum()
    }
}

/// Clean duplicates for a single user looked up by name.
///
/// An unknown name fails with `Error::UserNotFound` before anything is
/// scanned.
pub async fn clean_user_by_name<D, S, F>(
    directory: &D,
    scanner: &DuplicateScanner<'_, S>,
    username: &str,
    mut on_event: F,
) -> Result<UserCleanReport>
where
    D: UserDirectory + ?Sized,
    S: EntryStore + ?Sized,
    F: FnMut(CleanEvent<'_>),
{
    let user = directory.find_by_username(username).await?;

    on_event(CleanEvent::UserStarted { user: &user });
    let duplicates = scanner.clean_duplicates(&user).await?;
    on_event(CleanEvent::UserFinished {
        user: &user,
        duplicates,
    });

    Ok(UserCleanReport {
        username: user.username,
        duplicates,
    })
}

/// Clean duplicates for every user, one after another.
///
/// The first failing user aborts the whole run; users already processed
/// keep their deletions.
pub async fn clean_all_users<D, S, F>(
    directory: &D,
    scanner: &DuplicateScanner<'_, S>,
    mut on_event: F,
) -> Result<CleanSummary>
where
    D: UserDirectory + ?Sized,
    S: EntryStore + ?Sized,
    F: FnMut(CleanEvent<'_>),
{
    let users = directory.find_all().await?;
    tracing::info!("Cleaning duplicates for {} users", users.len());
    on_event(CleanEvent::Started {
        user_count: users.len(),
    });

    let mut summary = CleanSummary::default();

    for user in &users {
        on_event(CleanEvent::UserStarted { user });
        let duplicates = scanner.clean_duplicates(user).await?;
        on_event(CleanEvent::UserFinished { user, duplicates });

        summary.users.push(UserCleanReport {
            username: user.username.clone(),
            duplicates,
        });
    }

    tracing::info!("Removed {} duplicates in total", summary.total());
    Ok(summary)
}
