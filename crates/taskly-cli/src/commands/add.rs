//! Task creation command.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use super::parse_date;

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,

    /// Priority
    #[arg(short, long)]
    pub priority: i32,

    /// Deadline (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub deadline: NaiveDate,
}

pub async fn execute(args: AddArgs, config_path: &Path) -> Result<()> {
    let app = super::build_app(config_path)?;

    app.add_task(&args.name, args.priority, args.deadline).await?;

    println!(
        "{} Added task: {} (priority {}, due {})",
        "✓".green().bold(),
        args.name.cyan(),
        args.priority,
        args.deadline.format("%Y-%m-%d")
    );

    Ok(())
}
