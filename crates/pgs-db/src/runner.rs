//! External command invocation
//!
//! All database mutations other than version tracking go through the
//! Postgres client binaries. `CommandRunner` is the seam tests use to
//! substitute a fake instead of spawning real subprocesses.

use crate::error::{DbError, DbResult};
use async_trait::async_trait;

/// Runs a named external program with arguments.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute `program` with `args`, wait for it to exit, and return its
    /// combined stdout/stderr. A non-zero exit status is an error; the
    /// captured output is carried in the error so callers never lose the
    /// client tool's diagnostics.
    async fn run(&self, program: &str, args: &[&str]) -> DbResult<String>;
}

/// `CommandRunner` that spawns real subprocesses.
///
/// Output is echoed to the operator's console regardless of outcome, so
/// `psql` errors and notices stay visible. No timeout and no retry: a hung
/// client command blocks the operation indefinitely.
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, program: &str, args: &[&str]) -> DbResult<String> {
        log::debug!("Running {} {}", program, args.join(" "));

        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| DbError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        print!("{combined}");

        if !output.status.success() {
            return Err(DbError::CommandFailed {
                program: program.to_string(),
                status: output.status.to_string(),
                output: combined,
            });
        }

        Ok(combined)
    }
}
