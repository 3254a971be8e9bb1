//! Rollback command implementation

use anyhow::Result;
use pgs_db::{ops, ShellRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the rollback command.
///
/// Undoes the last "down" file by directory order; the tracked schema
/// version is not consulted.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    match ops::rollback(&config, &ShellRunner).await? {
        Some(file) => println!("Rolled back {file}"),
        None => println!(
            "Nothing to roll back: no down migrations in {}",
            config.migration_folder
        ),
    }
    Ok(())
}
