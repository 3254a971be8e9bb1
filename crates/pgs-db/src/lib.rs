//! pgs-db - Database layer for pgshift
//!
//! This crate wraps the external Postgres client commands (`createdb`,
//! `dropdb`, `pg_dump`, `psql`) behind the `CommandRunner` trait, assembles
//! connection strings, and tracks the schema version table.

pub mod connection;
pub mod error;
pub mod ops;
pub mod runner;
pub mod tracker;

pub use connection::connection_string;
pub use error::{DbError, DbResult};
pub use runner::{CommandRunner, ShellRunner};
pub use tracker::{SchemaClient, VersionTracker};
