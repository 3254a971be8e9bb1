//! Drop command implementation

use anyhow::Result;
use pgs_db::{ops, ShellRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the drop command. Drops without confirmation, like `dropdb`.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    ops::drop(&config, &ShellRunner).await?;
    println!("Dropped database {}", config.database);
    Ok(())
}
