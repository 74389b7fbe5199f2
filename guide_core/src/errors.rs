//! # Error Types
//!
//! Structured error types for guide_core. Every failure is a deterministic
//! consequence of the request (or of a malformed catalog file), so none of
//! them is retryable: the caller must correct the input and call again.
//!
//! ## Example
//!
//! ```rust
//! use guide_core::errors::{CalcError, CalcResult};
//!
//! fn check_shelves(shelf_count: u32) -> CalcResult<()> {
//!     if shelf_count == 0 {
//!         return Err(CalcError::invalid_numeric_input(
//!             "shelf_count",
//!             shelf_count.to_string(),
//!             "Shelf count must be a positive integer",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for guide_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for dimension calculations.
///
/// Each variant names one failure kind and carries enough context to build
/// an operator-facing message. A failed call never yields a partial result.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Model code is not one of the catalog's machines
    #[error("Unknown model: '{model}'")]
    UnknownModel { model: String },

    /// Diameter class is not listed for the model
    #[error("Unsupported diameter {diameter} for model {model} (valid: {valid})")]
    UnsupportedDiameter {
        model: String,
        diameter: u32,
        valid: String,
    },

    /// Height is below the minimum accepted height
    #[error("Height {height} mm is out of range - minimum is {min_height} mm")]
    HeightOutOfRange { height: u32, min_height: u32 },

    /// Height is not on the accepted step grid
    #[error("Height {height} mm is not on the grid - use {min_height} mm plus multiples of {step} mm")]
    HeightNotOnGrid {
        height: u32,
        min_height: u32,
        step: u32,
    },

    /// No B-value formula covers the combination
    #[error("No B-value formula for model {model}: {reason}")]
    UnresolvedFormula { model: String, reason: String },

    /// A numeric field could not be parsed or is not positive
    #[error("Invalid numeric input for '{field}': '{value}' - {reason}")]
    InvalidNumericInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A catalog file could not be read or violates a profile invariant
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },
}

impl CalcError {
    /// Create an UnknownModel error
    pub fn unknown_model(model: impl Into<String>) -> Self {
        CalcError::UnknownModel {
            model: model.into(),
        }
    }

    /// Create an UnsupportedDiameter error, listing the valid classes
    pub fn unsupported_diameter(model: impl Into<String>, diameter: u32, valid: &[u32]) -> Self {
        let valid = valid
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        CalcError::UnsupportedDiameter {
            model: model.into(),
            diameter,
            valid,
        }
    }

    /// Create an UnresolvedFormula error
    pub fn unresolved_formula(model: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UnresolvedFormula {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidNumericInput error
    pub fn invalid_numeric_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidNumericInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidCatalog error
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        CalcError::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownModel { .. } => "UNKNOWN_MODEL",
            CalcError::UnsupportedDiameter { .. } => "UNSUPPORTED_DIAMETER",
            CalcError::HeightOutOfRange { .. } => "HEIGHT_OUT_OF_RANGE",
            CalcError::HeightNotOnGrid { .. } => "HEIGHT_NOT_ON_GRID",
            CalcError::UnresolvedFormula { .. } => "UNRESOLVED_FORMULA",
            CalcError::InvalidNumericInput { .. } => "INVALID_NUMERIC_INPUT",
            CalcError::InvalidCatalog { .. } => "INVALID_CATALOG",
        }
    }
}
