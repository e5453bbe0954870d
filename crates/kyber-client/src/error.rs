//! Storage error types for client secret persistence.
//!
//! Every backend translates its own failures into [`StoreError`] so callers
//! never see engine-specific error types.

use std::fmt;

/// Errors that can occur during client secret storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No client secret is stored for the requested client.
    #[error("Client secret not found for client '{client_id}'")]
    NotFound {
        /// The client_id that was looked up.
        client_id: String,
    },

    /// The storage engine rejected the write because of a constraint.
    #[error("Conflict: {message}")]
    Conflict {
        /// Description of the violated constraint.
        message: String,
    },

    /// The storage engine could not be reached.
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Description of the connectivity failure.
        message: String,
    },

    /// Any other storage failure.
    #[error("Storage error: {message}")]
    Unknown {
        /// Description of the failure.
        message: String,
    },
}

impl StoreError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(client_id: impl Into<String>) -> Self {
        Self::NotFound {
            client_id: client_id.into(),
        }
    }

    /// Creates a new `Conflict` error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates a new `Unavailable` error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a new `Unknown` error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a conflict error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns `true` if the storage engine was unreachable.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::Unavailable { .. } => ErrorCategory::Unavailable,
            Self::Unknown { .. } => ErrorCategory::Unknown,
        }
    }
}

/// Categories of storage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Nothing matched the lookup.
    NotFound,
    /// Constraint violation.
    Conflict,
    /// Connectivity or pool failure.
    Unavailable,
    /// Anything else.
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result type for client secret storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
