//! Initialize command implementation

use anyhow::Result;
use pgs_db::VersionTracker;

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the initialize command.
///
/// Creates the schema_migrations table; fails if it already exists.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let tracker = VersionTracker::connect(&config).await?;
    tracker.initialize().await?;
    println!("Initialized schema_migrations in {}", config.database);
    Ok(())
}
