//! CLI command definitions and handlers.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

use taskly_core::config::Config;
use taskly_core::notify::{EmailNotifier, NotificationManager};
use taskly_core::Taskly;
use taskly_db::DbPool;

pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod update;

/// Taskly - Single-User Task Manager
#[derive(Parser)]
#[command(name = "taskly")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "taskly.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter configuration file and database
    Init(init::InitArgs),

    /// Add a new task
    Add(add::AddArgs),

    /// Update an existing task (rename and set priority/deadline)
    Update(update::UpdateArgs),

    /// Delete a task
    Delete(delete::DeleteArgs),

    /// Display tasks
    List(list::ListArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::execute(args, &self.config).await,
            Commands::Add(args) => add::execute(args, &self.config).await,
            Commands::Update(args) => update::execute(args, &self.config).await,
            Commands::Delete(args) => delete::execute(args, &self.config).await,
            Commands::List(args) => list::execute(args, &self.config).await,
        }
    }
}

/// Load configuration, open the database and wire up the dispatcher.
///
/// The email notifier is registered only when an `[email]` section is
/// configured; with none, notifications fan out to nothing.
pub fn build_app(config_path: &Path) -> Result<Taskly> {
    let config = Config::load_or_default(config_path)?;

    let pool = DbPool::open(&config.database.path)?;
    taskly_db::migrations::run_migrations(&pool)?;

    let mut notifications = NotificationManager::new();
    match &config.email {
        Some(email) => notifications.register(Box::new(EmailNotifier::new(email))),
        None => debug!("No [email] configuration; notifications are disabled"),
    }

    Ok(Taskly::new(pool, notifications))
}

/// Parse a `YYYY-MM-DD` deadline from the command line.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}'. Use YYYY-MM-DD format", s))
}
