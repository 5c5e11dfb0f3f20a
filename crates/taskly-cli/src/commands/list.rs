//! Task display command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use taskly_core::sort::{sort_tasks, SortKey};

use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// Sort by "priority" or "deadline" (defaults to name order)
    #[arg(short, long)]
    pub by: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Render as a table
    #[arg(long)]
    pub table: bool,
}

pub async fn execute(args: ListArgs, config_path: &Path) -> Result<()> {
    let app = super::build_app(config_path)?;

    let key = args.by.as_deref().map(parse_sort_key).transpose()?;

    if args.table {
        let tasks = match key {
            Some(key) => sort_tasks(app.tasks()?, key, !args.desc),
            None => app.tasks()?,
        };
        output::print_tasks_table(&tasks);
        return Ok(());
    }

    let listing = match key {
        Some(key) => app.display_tasks(key, !args.desc)?,
        None => {
            let lines: Vec<String> = app.tasks()?.iter().map(ToString::to_string).collect();
            lines.join("\n")
        }
    };

    if listing.is_empty() {
        println!("{}", "No tasks found.".dimmed());
    } else {
        println!("{}", listing);
    }

    Ok(())
}

fn parse_sort_key(s: &str) -> Result<SortKey> {
    SortKey::from_str(s)
        .ok_or_else(|| anyhow::anyhow!("invalid sort key '{}'. Use 'priority' or 'deadline'", s))
}
