//! Embedded schema migrations.
//!
//! Migrations are compiled into the binary and applied at startup, before
//! the pool serves any request. They run on a dedicated blocking thread
//! with a synchronous connection; the async pool is not involved.

use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors surfaced while applying embedded migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    #[error("migration task was cancelled: {message}")]
    Cancelled { message: String },
}

/// Apply all pending migrations against the given database.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection cannot be established or
/// a migration fails to apply.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn =
            PgConnection::establish(&database_url).map_err(|err| MigrationError::Connection {
                message: err.to_string(),
            })?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })?;
        for version in &applied {
            info!(%version, "applied migration");
        }
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::Cancelled {
        message: err.to_string(),
    })?
}
