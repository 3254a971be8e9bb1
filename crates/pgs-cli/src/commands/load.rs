//! Load command implementation

use anyhow::Result;
use pgs_db::{ops, ShellRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the load command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    ops::load(&config, &ShellRunner).await?;
    println!("Loaded {} from {}", config.database, config.dump_file);
    Ok(())
}
