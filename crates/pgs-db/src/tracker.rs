//! Schema version tracking
//!
//! Applied migration versions live in a one-column `schema_migrations`
//! table. The table's existence is the signal that a database has been
//! initialized; recording a version row is left to the migration scripts
//! themselves (see `ops::migrate`).

use crate::connection;
use crate::error::{DbError, DbResult};
use async_trait::async_trait;
use pgs_core::Config;
use tokio_postgres::Client;

const CREATE_TABLE: &str = "CREATE TABLE schema_migrations (version INTEGER NOT NULL)";
const TABLE_EXISTS: &str =
    "SELECT 1 FROM pg_catalog.pg_tables WHERE tablename = 'schema_migrations'";
const MAX_VERSION: &str = "SELECT MAX(version) FROM schema_migrations";

/// The three query shapes version tracking needs. Tests substitute a fake
/// instead of connecting to a live server, the same seam `CommandRunner`
/// provides for subprocesses.
#[async_trait]
pub trait SchemaClient: Send + Sync {
    /// Execute a statement, discarding any result
    async fn execute(&self, sql: &str) -> DbResult<()>;

    /// Whether the statement returns at least one row
    async fn has_rows(&self, sql: &str) -> DbResult<bool>;

    /// Single-row, single-column integer query; SQL NULL reads as None
    async fn query_scalar(&self, sql: &str) -> DbResult<Option<i32>>;
}

#[async_trait]
impl SchemaClient for Client {
    async fn execute(&self, sql: &str) -> DbResult<()> {
        Client::execute(self, sql, &[])
            .await
            .map_err(|e| DbError::SchemaError(e.to_string()))?;
        Ok(())
    }

    async fn has_rows(&self, sql: &str) -> DbResult<bool> {
        let rows = self
            .query(sql, &[])
            .await
            .map_err(|e| DbError::SchemaError(e.to_string()))?;
        Ok(!rows.is_empty())
    }

    async fn query_scalar(&self, sql: &str) -> DbResult<Option<i32>> {
        let row = self
            .query_one(sql, &[])
            .await
            .map_err(|e| DbError::SchemaError(e.to_string()))?;
        Ok(row.get(0))
    }
}

/// Reads and initializes the `schema_migrations` table.
pub struct VersionTracker {
    client: Box<dyn SchemaClient>,
}

impl VersionTracker {
    /// Connect to the configured database
    pub async fn connect(config: &Config) -> DbResult<Self> {
        let client = connection::connect(config).await?;
        Ok(Self::new(Box::new(client)))
    }

    /// Build a tracker over an existing client
    pub fn new(client: Box<dyn SchemaClient>) -> Self {
        Self { client }
    }

    /// Create the `schema_migrations` table.
    ///
    /// Fails if the table already exists; there is no IF NOT EXISTS guard,
    /// so initializing twice reports a schema error.
    pub async fn initialize(&self) -> DbResult<()> {
        self.client.execute(CREATE_TABLE).await
    }

    /// Report the current schema version.
    ///
    /// A database without the `schema_migrations` table is at version 0 —
    /// not yet initialized, not an error. With the table present, the
    /// version is the maximum recorded value; an empty table reads as 0.
    /// A failing query against an existing table propagates as an error
    /// rather than being masked to 0.
    pub async fn current_version(&self) -> DbResult<i32> {
        if !self.client.has_rows(TABLE_EXISTS).await? {
            return Ok(0);
        }

        let version = self.client.query_scalar(MAX_VERSION).await?;
        Ok(version.unwrap_or(0))
    }
}

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tests;
