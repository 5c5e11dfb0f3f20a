//! Task deletion command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

#[derive(Args)]
pub struct DeleteArgs {
    /// Task name
    pub name: String,
}

pub async fn execute(args: DeleteArgs, config_path: &Path) -> Result<()> {
    let app = super::build_app(config_path)?;

    app.delete_task(&args.name).await?;

    println!("{} Deleted task: {}", "✓".green().bold(), args.name.cyan());

    Ok(())
}
