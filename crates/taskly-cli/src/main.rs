//! Taskly CLI - single-user desktop task manager.
//!
//! Thin presentation layer over the taskly-core facade: parses input,
//! validates dates, renders confirmations and listings.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing from the environment; `--verbose` raises the default
/// level to debug.
fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "taskly_cli=debug,taskly_core=debug,taskly_db=debug"
    } else {
        "taskly_cli=info,taskly_core=info,taskly_db=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
