//! # Error Types
//!
//! Structured error types for bmi_core. The engine itself assumes validated
//! input, so in practice only [`BmiError::InvalidInput`] is produced by a
//! well-behaved shell; the remaining variants guard paths that correct
//! composition never reaches.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::errors::{BmiError, EngineResult};
//!
//! fn validate_pounds(pounds: f64) -> EngineResult<()> {
//!     if pounds <= 0.0 {
//!         return Err(BmiError::invalid_input(
//!             "pounds",
//!             pounds.to_string(),
//!             "Weight must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_pounds(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bmi_core operations
pub type EngineResult<T> = Result<T, BmiError>;

/// Structured error type for BMI engine operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BmiError {
    /// An input value is out of range or not a finite number
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A division had a zero denominator (zero height)
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: String },

    /// No insight entry exists for the category
    #[error("No insight available for category: {category}")]
    InsightNotFound { category: String },
}

impl BmiError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BmiError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        BmiError::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create an InsightNotFound error
    pub fn insight_not_found(category: impl Into<String>) -> Self {
        BmiError::InsightNotFound {
            category: category.into(),
        }
    }

    /// Engine functions are deterministic, so the same input fails the same
    /// way every time. Nothing is worth retrying.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BmiError::InvalidInput { .. } => "INVALID_INPUT",
            BmiError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            BmiError::InsightNotFound { .. } => "INSIGHT_NOT_FOUND",
        }
    }
}
