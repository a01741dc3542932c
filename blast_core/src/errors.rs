//! # Error Types
//!
//! Structured error types for blast_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Two families exist: input errors (`InvalidInput`, `MissingField`) for
//! records that cannot be resolved as given, and `DomainError` for
//! mathematically undefined intermediates (non-positive burden denominator,
//! degenerate vibration decay exponent). The diameter cap of the resolver is
//! deliberately *not* an error; it is carried as an advisory on a valid
//! result.
//!
//! ## Example
//!
//! ```rust
//! use blast_core::errors::{BlastError, BlastResult};
//!
//! fn validate_standoff(standoff_m: f64) -> BlastResult<()> {
//!     if standoff_m <= 0.0 {
//!         return Err(BlastError::InvalidInput {
//!             field: "standoff_m".to_string(),
//!             value: standoff_m.to_string(),
//!             reason: "Stand-off distance must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for blast_core operations
pub type BlastResult<T> = Result<T, BlastError>;

/// Structured error type for the blast design resolver.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BlastError {
    /// An input value is invalid (non-numeric, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field (or field combination) is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A calculation stage hit a mathematically undefined intermediate
    #[error("Domain error in {stage}: {reason}")]
    DomainError { stage: String, reason: String },
}

impl BlastError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BlastError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        BlastError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DomainError
    pub fn domain(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        BlastError::DomainError {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the supplied input record rather than
    /// by the arithmetic itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BlastError::InvalidInput { .. } | BlastError::MissingField { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BlastError::InvalidInput { .. } => "INVALID_INPUT",
            BlastError::MissingField { .. } => "MISSING_FIELD",
            BlastError::DomainError { .. } => "DOMAIN_ERROR",
        }
    }
}
