//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// An edit or delete referenced an id the store does not hold
    #[error("Expense not found: {id}")]
    NotFound { id: u64 },

    /// A load targeted a path that does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Persisted content could not be parsed in the declared format
    #[error("Failed to decode {format} data: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SpendlogError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Create a "file not found" error for a path
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Check if this is a "not found" error (unknown expense id)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a "file not found" error
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
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
        Self::Decode {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SpendlogError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Decode {
            format: "YAML",
            message: err.to_string(),
        }
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = SpendlogError::expense_not_found(42);
        assert_eq!(err.to_string(), "Expense not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_file_not_found());
    }

    #[test]
    fn test_file_not_found_error() {
        let err = SpendlogError::file_not_found("expenses.json");
        assert_eq!(err.to_string(), "File not found: expenses.json");
        assert!(err.is_file_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SpendlogError = io_err.into();
        assert!(matches!(err, SpendlogError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: SpendlogError = json_err.into();
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("Failed to decode JSON"));
    }
}
