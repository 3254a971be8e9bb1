//! Migrate command implementation

use anyhow::Result;
use pgs_db::{ops, ShellRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the migrate command.
///
/// Applies every "up" file in the migration folder, halting on the first
/// failure. The underlying `psql` output is echoed as each file runs.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    ops::migrate(&config, &ShellRunner).await?;
    println!("Migrations applied from {}", config.migration_folder);
    Ok(())
}
