//! Configuration and database initialization command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use taskly_core::config::Config;
use taskly_db::DbPool;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

const CONFIG_TEMPLATE: &str = r#"[database]
path = "taskly.db"

# Fill in and uncomment to enable email notifications.
# [email]
# api_key = "key-..."
# domain = "sandboxXXXX.mailgun.org"
# recipient = "you@example.com"
"#;

pub async fn execute(args: InitArgs, config_path: &Path) -> Result<()> {
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;

    let config = Config::load(config_path)?;
    let pool = DbPool::open(&config.database.path)?;
    taskly_db::migrations::run_migrations(&pool)?;

    println!("{} Created {}", "✓".green().bold(), config_path.display());
    println!("  Database: {}", config.database.path.display());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  taskly add \"write report\" --priority 1 --deadline 2026-12-31");
    println!("  taskly list --by deadline");

    Ok(())
}
