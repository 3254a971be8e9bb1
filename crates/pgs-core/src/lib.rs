//! pgs-core - Core library for pgshift
//!
//! This crate provides shared types used across all pgshift components:
//! connection/path configuration, migration file discovery, and the core
//! error type.

pub mod config;
pub mod error;
pub mod migrations;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use migrations::{migration_files, Direction};
