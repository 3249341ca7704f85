//! Shared database types for CareDesk
//!
//! This module provides the connection pool constructor, the embedded schema
//! migrations, and common database-related error types used across domain
//! repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::Config;
use crate::error::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => Error::NotFound(format!("{what} not found")),
        }
    }
}

/// SQLSTATE raised by PostgreSQL on a foreign key violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Name of the violated foreign key constraint, if `err` is one
pub fn violated_foreign_key(err: &sqlx::Error) -> Option<String> {
    let db = err.as_database_error()?;
    if db.code().as_deref() != Some(FOREIGN_KEY_VIOLATION) {
        return None;
    }
    Some(db.constraint().unwrap_or_default().to_string())
}

/// Open the shared connection pool.
///
/// The pool is created once by the composition root and handed to every
/// repository; there is no process-wide pool.
pub async fn connect(config: &Config) -> Result<PgPool, Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool established"
    );
    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), Error> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
