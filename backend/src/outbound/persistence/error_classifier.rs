//! Storage-error classification applied uniformly by every repository.
//!
//! Diesel and pool failures collapse into the closed set [`StorageFailure`],
//! so repositories map outcomes without inspecting driver details.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

const UNIQUE_VIOLATION_MESSAGE: &str = "duplicate key value violates unique constraint";

/// Classified outcome of a failed storage operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageFailure {
    /// The requested row does not exist.
    #[error("record not found")]
    NotFound,
    /// An insert or update collided with a unique index.
    #[error("unique constraint violated: {}", constraint.as_deref().unwrap_or("unknown"))]
    UniqueViolation {
        /// Name of the violated index, when the driver reports it.
        constraint: Option<String>,
    },
    /// The database could not be reached.
    #[error("database connection error: {message}")]
    Connection {
        /// Driver or pool message.
        message: String,
    },
    /// Any other failure.
    #[error("database error: {message}")]
    Other {
        /// Driver message.
        message: String,
    },
}

impl StorageFailure {
    /// Whether this failure is a unique violation on `constraint`.
    #[must_use]
    pub fn violates(&self, constraint: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint: Some(name) } if name == constraint)
    }
}

/// Classify a Diesel error.
///
/// Unique violations are recognised by Diesel's error kind or by
/// PostgreSQL's native message.
pub fn classify_diesel_error(error: DieselError) -> StorageFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StorageFailure::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StorageFailure::UniqueViolation {
                constraint: info
                    .constraint_name()
                    .map(str::to_owned)
                    .or_else(|| constraint_from_message(info.message())),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StorageFailure::Connection {
                message: info.message().to_owned(),
            }
        }
        DieselError::DatabaseError(_, info)
            if info.message().contains(UNIQUE_VIOLATION_MESSAGE) =>
        {
            StorageFailure::UniqueViolation {
                constraint: constraint_from_message(info.message()),
            }
        }
        DieselError::DatabaseError(_, info) => StorageFailure::Other {
            message: info.message().to_owned(),
        },
        other => StorageFailure::Other {
            message: other.to_string(),
        },
    }
}

/// Classify a pool failure. Every pool failure is a connection failure.
pub fn classify_pool_error(error: PoolError) -> StorageFailure {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    debug!(%message, "database pool unavailable");
    StorageFailure::Connection { message }
}

fn constraint_from_message(message: &str) -> Option<String> {
    message
        .split_once(UNIQUE_VIOLATION_MESSAGE)
        .and_then(|(_, rest)| rest.split('"').nth(1))
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}
