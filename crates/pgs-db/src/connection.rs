//! Connection string assembly and client setup

use crate::error::{DbError, DbResult};
use pgs_core::Config;
use tokio_postgres::{Client, NoTls};

/// Assemble a libpq keyword/value connection string from the configuration.
///
/// TLS is disabled; version tracking talks to the same local server the
/// client commands do. The configured port is not encoded here — client
/// commands and the connection both fall back to the environment's default
/// port. Known gap, kept for compatibility with existing setups.
pub fn connection_string(config: &Config) -> String {
    format!(
        "user='{}' dbname='{}' password='{}' host='{}' sslmode=disable",
        config.username, config.database, config.password, config.host
    )
}

/// Open a connection for version tracking.
///
/// The connection driver is detached onto the runtime and runs until the
/// client is dropped; driver errors after that point are only logged.
pub async fn connect(config: &Config) -> DbResult<Client> {
    let (client, connection) = tokio_postgres::connect(&connection_string(config), NoTls)
        .await
        .map_err(|e| DbError::ConnectionError(e.to_string()))?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("Postgres connection error: {e}");
        }
    });

    Ok(client)
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
