//! Custom error types for SmartSave
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable: callers surface
//! the message to the user and carry on with the prior in-memory state.

use thiserror::Error;

/// The main error type for SmartSave operations
#[derive(Error, Debug)]
pub enum SmartSaveError {
    /// A positive amount was required but the input was non-positive or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The category identifier is not one of the fixed spending categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Persisted or imported state could not be merged over the current ledger
    #[error("Malformed saved data: {0}")]
    MalformedPersistedState(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SmartSaveError {
    /// Create an "invalid amount" error for a raw user input
    pub fn invalid_amount(input: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(format!("'{}' must be a positive number", input))
    }

    /// Create an "invalid amount" error for an amount above the supported limit
    pub fn amount_over_limit(input: impl std::fmt::Display, limit: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(format!("'{}' is larger than the limit of {}", input, limit))
    }

    /// Check if this error was caused by user input rather than I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::UnknownCategory(_) | Self::Validation(_)
        )
    }

    /// Check if this is a malformed state error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPersistedState(_))
    }
}

impl From<std::io::Error> for SmartSaveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SmartSaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SmartSave operations
pub type SmartSaveResult<T> = Result<T, SmartSaveError>;
