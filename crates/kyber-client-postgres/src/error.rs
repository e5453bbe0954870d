//! Error types for the PostgreSQL client secret backend.
//!
//! sqlx errors are classified here and never leave the crate as-is.

use kyber_client::{ErrorCategory, StoreError};
use sqlx_core::error::{Error as SqlxError, ErrorKind};

/// PostgreSQL SQLSTATE class for connection exceptions (08xxx).
pub const PG_CONNECTION_EXCEPTION_CLASS: &str = "08";

/// PostgreSQL SQLSTATE class for operator intervention (57xxx), e.g. admin shutdown.
pub const PG_OPERATOR_INTERVENTION_CLASS: &str = "57";

/// PostgreSQL error code for too many connections (53300).
pub const PG_TOO_MANY_CONNECTIONS: &str = "53300";

/// Checks if a sqlx error has a specific PostgreSQL error code.
pub fn has_pg_error_code(err: &SqlxError, code: &str) -> bool {
    if let SqlxError::Database(db_err) = err {
        db_err.code().as_deref() == Some(code)
    } else {
        false
    }
}

fn has_pg_error_class(err: &SqlxError, class: &str) -> bool {
    if let SqlxError::Database(db_err) = err {
        db_err.code().is_some_and(|code| code.starts_with(class))
    } else {
        false
    }
}

/// Classifies a sqlx error into a storage error category.
pub fn classify(err: &SqlxError) -> ErrorCategory {
    match err {
        SqlxError::RowNotFound => ErrorCategory::NotFound,
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => ErrorCategory::Unavailable,
        SqlxError::Database(_)
            if has_pg_error_class(err, PG_CONNECTION_EXCEPTION_CLASS)
                || has_pg_error_class(err, PG_OPERATOR_INTERVENTION_CLASS)
                || has_pg_error_code(err, PG_TOO_MANY_CONNECTIONS) =>
        {
            ErrorCategory::Unavailable
        }
        SqlxError::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => ErrorCategory::Conflict,
            _ => ErrorCategory::Unknown,
        },
        _ => ErrorCategory::Unknown,
    }
}

/// Translates a sqlx error raised while handling `client_id` into a [`StoreError`].
pub fn store_error(err: SqlxError, client_id: &str) -> StoreError {
    match classify(&err) {
        ErrorCategory::NotFound => StoreError::not_found(client_id),
        ErrorCategory::Conflict => StoreError::conflict(err.to_string()),
        ErrorCategory::Unavailable => StoreError::unavailable(err.to_string()),
        ErrorCategory::Unknown => StoreError::unknown(err.to_string()),
    }
}

/// Errors from setting up the PostgreSQL backend.
#[derive(Debug, thiserror::Error)]
pub enum PostgresError {
    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connection(#[from] SqlxError),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PostgresError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<PostgresError> for StoreError {
    fn from(err: PostgresError) -> Self {
        match err {
            PostgresError::Connection(e) => StoreError::unavailable(e.to_string()),
            PostgresError::Migration(e) => StoreError::unknown(format!("Migration error: {e}")),
            PostgresError::Config { message } => {
                StoreError::unknown(format!("Configuration error: {message}"))
            }
        }
    }
}

/// Result type alias for PostgreSQL setup operations.
pub type Result<T> = std::result::Result<T, PostgresError>;
