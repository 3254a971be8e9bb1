//! Configuration types and parsing for pgshift.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection and filesystem configuration for a single target database.
///
/// Loaded from `pgshift.yml` (or assembled directly by a caller) and held
/// immutable for the duration of an operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Role used for client commands and catalog queries
    #[serde(default)]
    pub username: String,

    /// Password for the role (may legitimately be empty for trust auth)
    #[serde(default)]
    pub password: String,

    /// Target database name
    #[serde(default)]
    pub database: String,

    /// Database server host
    #[serde(default)]
    pub host: String,

    /// Database server port.
    ///
    /// Carried in the configuration but not encoded into the assembled
    /// connection string; client commands fall back to the environment's
    /// default port. Known gap inherited from earlier versions of this tool.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path snapshots are exported to / imported from
    #[serde(default)]
    pub dump_file: String,

    /// Directory containing `<digits>_<name>.up.sql` / `.down.sql` files
    #[serde(default)]
    pub migration_folder: String,
}

fn default_port() -> u16 {
    5432
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Called after any command-line overrides have been applied, so a field
    /// missing from the file can still be supplied by a flag.
    pub fn validate(&self) -> CoreResult<()> {
        if self.username.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "username cannot be empty".to_string(),
            });
        }

        if self.database.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database cannot be empty".to_string(),
            });
        }

        if self.host.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "host cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
