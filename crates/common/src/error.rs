//! Common error types and handling for CareDesk

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// SQLSTATE raised by PostgreSQL on a unique constraint violation
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE raised by PostgreSQL on a CHECK constraint violation
const CHECK_VIOLATION: &str = "23514";

/// Common error type for the CareDesk core
///
/// The outer shell maps each kind to its own transport status via
/// [`Error::error_code`]. Rows hidden by ownership or visibility rules are
/// reported as [`Error::NotFound`], exactly like rows that do not exist.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the error code reported to callers
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Database(_) => "DATABASE_ERROR",
            Error::Migration(_) => "MIGRATION_ERROR",
            Error::Configuration(_) => "CONFIGURATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Conflict(_) => "CONFLICT",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error is a not-found (including hidden-by-visibility)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Translate constraint violations into domain errors.
    ///
    /// Unique violations become [`Error::Conflict`], CHECK violations become
    /// [`Error::Validation`]; every other database error is passed through.
    pub fn from_constraint(err: sqlx::Error, what: &str) -> Self {
        let code = err
            .as_database_error()
            .and_then(|db| db.code())
            .map(|c| c.into_owned());

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => Error::Conflict(format!("{what} already exists")),
            Some(CHECK_VIOLATION) => Error::Validation(format!("{what} violates a constraint")),
            _ => Error::Database(err),
        }
    }
}
