//! Version command implementation

use anyhow::Result;
use pgs_db::VersionTracker;

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the version command.
///
/// Prints 0 for a database that has not been initialized yet.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let tracker = VersionTracker::connect(&config).await?;
    let version = tracker.current_version().await?;
    println!("{version}");
    Ok(())
}
