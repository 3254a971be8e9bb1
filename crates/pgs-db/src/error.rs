//! Error types for pgs-db

use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    /// D001: Database connection failed
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// D002: External client command exited non-zero
    #[error("[D002] Command '{program}' failed ({status}): {output}")]
    CommandFailed {
        program: String,
        status: String,
        output: String,
    },

    /// D003: External client command could not be started
    #[error("[D003] Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// D004: DDL/DML against the schema version table failed
    #[error("[D004] Schema version query failed: {0}")]
    SchemaError(String),

    /// Error bubbled up from pgs-core (config, discovery)
    #[error(transparent)]
    Core(#[from] pgs_core::CoreError),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
