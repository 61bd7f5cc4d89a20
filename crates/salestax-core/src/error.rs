//! # Error Types
//!
//! Domain-specific error types for salestax-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salestax-core errors (this file)                                      │
//! │  ├── CoreError        - What every public operation returns            │
//! │  └── ValidationError  - Caller contract violations                     │
//! │                                                                         │
//! │  receipt-cli errors (in app)                                           │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError::InvalidArgument → anyhow (main)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! A line that does not follow the item grammar is an expected outcome.
//! `ItemLineParser::parse` returns `Ok(None)` for it. Only the batch
//! operation `parse_all` turns a mismatch into [`CoreError::UnparsableLine`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The caller broke an input contract (empty line, empty item list,
    /// empty description, out-of-range value).
    ///
    /// Always surfaced immediately, never retried.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// One line of a batch did not match the item line grammar.
    ///
    /// ## User Workflow
    /// ```text
    /// parse_all(["1 book at 12.49", "1 book 12.49"])
    ///      │
    ///      ▼
    /// line 1 has no "at" keyword
    ///      │
    ///      ▼
    /// UnparsableLine { index: 1, line: "1 book 12.49" }
    /// ```
    #[error("Line {index} does not describe an item: {line:?}")]
    UnparsableLine { index: usize, line: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A collection that must hold at least one element is empty.
    #[error("{field} cannot be an empty collection")]
    EmptyCollection { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: String, max: String },

    /// Invalid format (e.g. a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnparsableLine {
            index: 2,
            line: "1 book 12.49".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 2 does not describe an item: \"1 book 12.49\""
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "description".to_string(),
        };
        assert_eq!(err.to_string(), "description is required");

        let err = ValidationError::EmptyCollection {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items cannot be an empty collection");
    }

    #[test]
    fn test_validation_converts_to_invalid_argument() {
        let validation_err = ValidationError::Required {
            field: "line".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(core_err.to_string(), "Invalid argument: line is required");
    }
}
