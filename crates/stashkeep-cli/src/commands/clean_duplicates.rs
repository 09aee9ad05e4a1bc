use std::process::ExitCode;

use anyhow::Result;

use stashkeep_core::{
    dedup::{clean_all_users, clean_user_by_name, BaselinePolicy, CleanEvent, DuplicateScanner},
    storage::{Database, EntryRepository, UserRepository},
    AppConfig,
};

pub async fn run(db: &Database, config: &AppConfig, username: Option<&str>) -> Result<ExitCode> {
    let users = UserRepository::new(db);
    let entries = EntryRepository::new(db);
    let scanner = DuplicateScanner::new(&entries)
        .with_policy(BaselinePolicy::from_config(&config.dedup));

    match username {
        Some(name) => match clean_user_by_name(&users, &scanner, name, print_progress).await {
            Ok(_) => {
                println!("Finished cleaning.");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) if e.is_user_not_found() => {
                eprintln!("User \"{}\" not found.", name);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
        None => {
            let summary = clean_all_users(&users, &scanner, print_progress).await?;
            println!(
                "Finished cleaning. {} duplicates found in total",
                summary.total()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_progress(event: CleanEvent<'_>) {
    match event {
        CleanEvent::Started { user_count } => {
            println!("Cleaning through {} user accounts", user_count);
        }
        CleanEvent::UserStarted { user } => {
            println!("Processing user {}", user.username);
        }
        CleanEvent::UserFinished { user, duplicates } => {
            println!("Cleaned {} duplicates for user {}", duplicates, user.username);
        }
    }
}
