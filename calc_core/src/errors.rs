//! # Error Types
//!
//! Structured error types for calc_core. Arithmetic failures are absorbed by
//! the engine and surfaced as a display state; the remaining variants come
//! from configuration loading and are returned to the caller.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_div(lhs: f64, rhs: f64) -> CalcResult<f64> {
//!     if rhs == 0.0 {
//!         return Err(CalcError::DivideByZero);
//!     }
//!     Ok(lhs / rhs)
//! }
//!
//! assert_eq!(checked_div(1.0, 0.0).unwrap_err().to_string(), "Cannot divide by zero");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// The `Display` text of the arithmetic variants is exactly what the
/// expression trace shows while the engine sits in the error state.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Division with a zero right-hand operand
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// Arithmetic produced infinity or NaN
    #[error("Invalid calculation")]
    InvalidResult,

    /// A configuration value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Config schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivideByZero => "DIVIDE_BY_ZERO",
            CalcError::InvalidResult => "INVALID_RESULT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("max_input_length", "0", "must be at least 1");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unit_variant_serialization() {
        let json = serde_json::to_string(&CalcError::DivideByZero).unwrap();
        assert_eq!(json, r#"{"type":"DivideByZero"}"#);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::InvalidResult.to_string(), "Invalid calculation");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::DivideByZero.error_code(), "DIVIDE_BY_ZERO");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::file_error("open", "x.json", "missing").error_code(), "FILE_ERROR");
    }
}
