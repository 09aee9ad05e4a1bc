use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stashkeep_core::{storage::Database, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "stashkeep")]
#[command(author, version, about = "Maintenance commands for a stashkeep article library")]
struct Cli {
    /// Configuration file (defaults to ~/.config/stashkeep/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cleans the database for duplicates
    #[command(
        long_about = "This command helps you to clean your articles list in case of duplicates"
    )]
    CleanDuplicates {
        /// User to clean (all users when omitted)
        username: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let db = Database::new(&config).await?;

    match cli.command {
        Commands::CleanDuplicates { username } => {
            commands::clean_duplicates::run(&db, &config, username.as_deref()).await
        }
    }
}
