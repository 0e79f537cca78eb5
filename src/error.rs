//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Amount input that is non-numeric or non-positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Blank or whitespace-only expense description
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Category text outside the closed enumeration
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unparseable date input at the form boundary
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SpendlogError {
    /// Create an invalid-amount error from the offending input
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount(input.into())
    }

    /// Create an unknown-category error from the offending input
    pub fn unknown_category(input: impl Into<String>) -> Self {
        Self::UnknownCategory(input.into())
    }

    /// Check if this error is a validation failure (blocks the save action)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::EmptyDescription
                | Self::UnknownCategory(_)
                | Self::InvalidDate(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SpendlogError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendlogError::invalid_amount("abc");
        assert_eq!(err.to_string(), "Invalid amount: abc");

        let err = SpendlogError::EmptyDescription;
        assert_eq!(err.to_string(), "Description cannot be empty");
    }

    #[test]
    fn test_validation_classification() {
        assert!(SpendlogError::invalid_amount("-5").is_validation());
        assert!(SpendlogError::EmptyDescription.is_validation());
        assert!(SpendlogError::unknown_category("groceries").is_validation());
        assert!(!SpendlogError::Export("disk full".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendlogError = io_err.into();
        assert!(matches!(err, SpendlogError::Io(_)));
    }
}
