//! Create command implementation

use anyhow::Result;
use pgs_db::{ops, ShellRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the create command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    ops::create(&config, &ShellRunner).await?;
    println!("Created database {}", config.database);
    Ok(())
}
