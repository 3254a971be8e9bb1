//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// pgshift - create, snapshot, and migrate Postgres databases
#[derive(Parser, Debug)]
#[command(name = "pgs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = "pgshift.yml")]
    pub config: String,

    /// Override the connection username
    #[arg(long, global = true, env = "PGS_USERNAME")]
    pub username: Option<String>,

    /// Override the connection password
    #[arg(long, global = true, env = "PGS_PASSWORD")]
    pub password: Option<String>,

    /// Override the target database name
    #[arg(long, global = true, env = "PGS_DATABASE")]
    pub database: Option<String>,

    /// Override the database host
    #[arg(long, global = true, env = "PGS_HOST")]
    pub host: Option<String>,

    /// Override the database port
    #[arg(long, global = true, env = "PGS_PORT")]
    pub port: Option<u16>,

    /// Override the snapshot dump file path
    #[arg(long, global = true)]
    pub dump_file: Option<String>,

    /// Override the migration folder
    #[arg(long, global = true)]
    pub migration_folder: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configured database
    Create,

    /// Drop the configured database
    Drop,

    /// Export a full snapshot to the dump file
    Dump,

    /// Import a snapshot from the dump file
    Load,

    /// Apply all "up" migrations in the migration folder
    Migrate,

    /// Undo the last "down" migration by directory order
    Rollback,

    /// Print the current schema version
    Version,

    /// Create the schema_migrations version table
    #[command(alias = "init")]
    Initialize,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
