//! Migration file discovery
//!
//! Migration scripts live in a flat folder and are named
//! `<digits>_<description>.up.sql` / `<digits>_<description>.down.sql`.
//! The digit prefix is a version identifier by convention only; it is never
//! parsed or compared numerically here.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::path::Path;

/// Whether a migration applies ("up") or reverses ("down") a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The filename token for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// List the migration file names in `folder` matching `direction`.
///
/// Names are returned in the order the directory listing yields them, which
/// is typically but not guaranteed to be lexicographic. Callers that apply
/// the files rely on this order, so renaming files out of their listing
/// order changes application order too.
///
/// An unreadable folder is an error; a folder with no matching files is an
/// empty result.
pub fn migration_files(folder: &Path, direction: Direction) -> CoreResult<Vec<String>> {
    let entries = std::fs::read_dir(folder).map_err(|e| CoreError::DirectoryRead {
        path: folder.display().to_string(),
        source: e,
    })?;

    let mut migrations = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::DirectoryRead {
            path: folder.display().to_string(),
            source: e,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::warn!("Skipping non-UTF-8 entry in {}", folder.display());
            continue;
        };
        if matches_direction(name, direction) {
            migrations.push(name.to_string());
        }
    }

    Ok(migrations)
}

/// Check a filename against `<digits>_<anything>.<direction>.sql`.
fn matches_direction(name: &str, direction: Direction) -> bool {
    let suffix = match direction {
        Direction::Up => ".up.sql",
        Direction::Down => ".down.sql",
    };

    let Some(stem) = name.strip_suffix(suffix) else {
        return false;
    };

    let Some(underscore) = stem.find('_') else {
        return false;
    };

    let (version, description) = stem.split_at(underscore);
    !version.is_empty()
        && version.bytes().all(|b| b.is_ascii_digit())
        && description.len() > 1
}

#[cfg(test)]
#[path = "migrations_test.rs"]
mod tests;
