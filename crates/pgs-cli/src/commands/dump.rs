//! Dump command implementation

use anyhow::Result;
use pgs_db::{ops, ShellRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::load_config;

/// Execute the dump command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    ops::dump(&config, &ShellRunner).await?;
    println!("Dumped {} to {}", config.database, config.dump_file);
    Ok(())
}
