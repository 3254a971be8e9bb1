//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use pgs_core::Config;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load the configuration file, apply command-line overrides, and validate.
///
/// Validation runs after the overrides so a field missing from the file can
/// still be supplied by a flag or environment variable.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let path = Path::new(&global.config);
    let mut config = Config::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if let Some(username) = &global.username {
        config.username = username.clone();
    }
    if let Some(password) = &global.password {
        config.password = password.clone();
    }
    if let Some(database) = &global.database {
        config.database = database.clone();
    }
    if let Some(host) = &global.host {
        config.host = host.clone();
    }
    if let Some(port) = global.port {
        config.port = port;
    }
    if let Some(dump_file) = &global.dump_file {
        config.dump_file = dump_file.clone();
    }
    if let Some(migration_folder) = &global.migration_folder {
        config.migration_folder = migration_folder.clone();
    }

    config.validate()?;

    if global.verbose {
        println!(
            "Target: {} on {} as {}",
            config.database, config.host, config.username
        );
    }

    Ok(config)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
