//! Centralized error types for Taskly.

use thiserror::Error;

/// Main error type for Taskly operations.
#[derive(Error, Debug)]
pub enum TasklyError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] taskly_db::DbError),

    #[error("Notification error: {0}")]
    Notification(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Taskly operations.
pub type TasklyResult<T> = Result<T, TasklyError>;

impl TasklyError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
