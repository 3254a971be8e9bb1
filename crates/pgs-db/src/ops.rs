//! Database operations
//!
//! Each operation maps onto one or more Postgres client command
//! invocations. Everything is sequential: one command at a time, awaited to
//! completion, first failure wins.

use crate::error::DbResult;
use crate::runner::CommandRunner;
use pgs_core::{migration_files, Config, Direction};
use std::path::Path;

const CREATEDB: &str = "createdb";
const DROPDB: &str = "dropdb";
const PG_DUMP: &str = "pg_dump";
const PSQL: &str = "psql";

/// Create the configured database
pub async fn create(config: &Config, runner: &dyn CommandRunner) -> DbResult<()> {
    runner.run(CREATEDB, &[&config.database]).await?;
    Ok(())
}

/// Drop the configured database. No confirmation, no existence check.
pub async fn drop(config: &Config, runner: &dyn CommandRunner) -> DbResult<()> {
    runner.run(DROPDB, &[&config.database]).await?;
    Ok(())
}

/// Export a full snapshot to the configured dump file
pub async fn dump(config: &Config, runner: &dyn CommandRunner) -> DbResult<()> {
    runner
        .run(PG_DUMP, &["-f", &config.dump_file, &config.database])
        .await?;
    Ok(())
}

/// Import a snapshot from the configured dump file
pub async fn load(config: &Config, runner: &dyn CommandRunner) -> DbResult<()> {
    runner
        .run(PSQL, &["-d", &config.database, "-f", &config.dump_file])
        .await?;
    Ok(())
}

/// Apply every "up" migration in the configured folder, in discovery order.
///
/// Halts on the first failing script and returns its error; later files are
/// never attempted, and the database stays wherever the last successful
/// script left it. Running a script does not insert a row into
/// `schema_migrations` — each migration records its own version, so a
/// script that omits the INSERT leaves the tracked version behind the
/// actual schema.
pub async fn migrate(config: &Config, runner: &dyn CommandRunner) -> DbResult<()> {
    let folder = Path::new(&config.migration_folder);
    let files = migration_files(folder, Direction::Up)?;

    for file in &files {
        log::info!("Applying {file}");
        let path = folder.join(file);
        let path = path.to_string_lossy();
        runner
            .run(PSQL, &["-d", &config.database, "-f", &path])
            .await?;
    }

    Ok(())
}

/// Run the last "down" migration in discovery order.
///
/// Selection is by directory listing only; the tracked schema version is
/// not consulted, so this undoes whichever file lists last rather than the
/// most recently applied migration. A folder with no "down" files is a
/// no-op; the returned name tells callers whether anything actually ran.
pub async fn rollback(config: &Config, runner: &dyn CommandRunner) -> DbResult<Option<String>> {
    let folder = Path::new(&config.migration_folder);
    let files = migration_files(folder, Direction::Down)?;

    let Some(file) = files.last() else {
        log::warn!("No down migrations in {}", folder.display());
        return Ok(None);
    };

    log::info!("Rolling back {file}");
    let path = folder.join(file);
    let path = path.to_string_lossy();
    runner
        .run(PSQL, &["-d", &config.database, "-f", &path])
        .await?;

    Ok(Some(file.clone()))
}

#[cfg(test)]
#[path = "ops_test.rs"]
mod tests;
