//! pgshift CLI - manage Postgres databases and versioned SQL migrations

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{create, drop, dump, initialize, load, migrate, rollback, version};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Create => create::execute(&cli.global).await,
        cli::Commands::Drop => drop::execute(&cli.global).await,
        cli::Commands::Dump => dump::execute(&cli.global).await,
        cli::Commands::Load => load::execute(&cli.global).await,
        cli::Commands::Migrate => migrate::execute(&cli.global).await,
        cli::Commands::Rollback => rollback::execute(&cli.global).await,
        cli::Commands::Version => version::execute(&cli.global).await,
        cli::Commands::Initialize => initialize::execute(&cli.global).await,
    }
}
