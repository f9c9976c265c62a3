//! Error types for priorauth
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for priorauth operations
pub type Result<T> = std::result::Result<T, PriorAuthError>;

/// Main error type for all priorauth operations
#[derive(Debug, Error)]
pub enum PriorAuthError {
    /// Item id is not part of the registry
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// A request was attempted on an item that does not accept one
    #[error("Item does not accept information requests: {0}")]
    NotRequestable(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl PriorAuthError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            PriorAuthError::UnknownItem(_) => "UNKNOWN_ITEM",
            PriorAuthError::NotRequestable(_) => "NOT_REQUESTABLE",
            PriorAuthError::InvalidJson(_) => "INVALID_JSON",
            PriorAuthError::FileNotFound(_) => "FILE_NOT_FOUND",
            PriorAuthError::ConfigError(_) => "CONFIG_ERROR",
            PriorAuthError::Io(_) => "IO_ERROR",
            PriorAuthError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Whether the caller can correct the input and retry
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            PriorAuthError::UnknownItem(_) | PriorAuthError::NotRequestable(_)
        )
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        PriorAuthError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &PriorAuthError) -> i32 {
    if error.is_caller_error() {
        2
    } else {
        1
    }
}
