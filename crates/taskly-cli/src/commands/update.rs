//! Task update command.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use super::parse_date;

#[derive(Args)]
pub struct UpdateArgs {
    /// Current task name
    pub old_name: String,

    /// New task name
    #[arg(long = "name", value_name = "NEW_NAME")]
    pub new_name: String,

    /// New priority
    #[arg(short, long)]
    pub priority: i32,

    /// New deadline (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub deadline: NaiveDate,
}

pub async fn execute(args: UpdateArgs, config_path: &Path) -> Result<()> {
    let app = super::build_app(config_path)?;

    app.update_task(&args.old_name, &args.new_name, args.priority, args.deadline)
        .await?;

    println!(
        "{} Updated task: {} to {}",
        "✓".green().bold(),
        args.old_name.dimmed(),
        args.new_name.cyan()
    );

    Ok(())
}
