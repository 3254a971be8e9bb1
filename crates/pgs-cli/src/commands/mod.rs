//! CLI command implementations

pub(crate) mod common;
pub(crate) mod create;
pub(crate) mod drop;
pub(crate) mod dump;
pub(crate) mod initialize;
pub(crate) mod load;
pub(crate) mod migrate;
pub(crate) mod rollback;
pub(crate) mod version;
