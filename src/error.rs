//! Error types for Finance-Lens operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! operations including storage, the categories resource, and CLI commands.

use thiserror::Error;

/// Result type alias for Finance-Lens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Finance-Lens operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage-related errors (database operations).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Categories resource errors (file read/write).
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Storage-specific errors for database operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(String),

    /// Database file is read-only or inaccessible.
    ///
    /// Raised as a dedicated variant (mapped from the `SQLite` result
    /// code) so callers can react without parsing error text.
    #[error("database is read-only or permission was denied")]
    ReadOnly,

    /// Expense not found by ID.
    #[error("no expense found with ID {id}")]
    ExpenseNotFound {
        /// Expense ID that was not found.
        id: i64,
    },
}

/// Categories resource errors for file operations.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Failed to read the categories file.
    #[error("failed to read categories file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write the categories file.
    #[error("failed to write categories file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

// Implement From traits for library errors

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _) => match e.code {
                rusqlite::ErrorCode::ReadOnly
                | rusqlite::ErrorCode::PermissionDenied
                | rusqlite::ErrorCode::CannotOpen => Self::ReadOnly,
                _ => Self::Database(err.to_string()),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(StorageError::from(err))
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
