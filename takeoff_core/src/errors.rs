//! # Error Types
//!
//! Structured error types for takeoff_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::errors::{TakeoffError, TakeoffResult};
//!
//! fn validate_span(deck_length_m: f64) -> TakeoffResult<()> {
//!     if deck_length_m <= 0.0 {
//!         return Err(TakeoffError::InvalidDimension {
//!             field: "deckLengthM".to_string(),
//!             value: deck_length_m.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for takeoff_core operations
pub type TakeoffResult<T> = Result<T, TakeoffError>;

/// Structured error type for take-off operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
/// Field names in errors use the JSON wire spelling (e.g. `deckWidthM`)
/// so a caller can map an error straight back to its request payload.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TakeoffError {
    /// A required input field was absent from the request
    #[error("Missing required field: {field}")]
    MissingInputField { field: String },

    /// A supplied dimension is invalid (non-positive, non-finite, out of range)
    #[error("Invalid dimension for '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// A required member length is longer than any stocked length
    #[error("Required length {required_m} m exceeds longest stock length {max_stock_m} m")]
    ExceedsCatalogRange { required_m: f64, max_stock_m: f64 },

    /// Regional parameters could not be resolved for the request
    #[error("Regional parameters unresolved: {reason}")]
    MissingRegionalParameter { reason: String },

    /// A stock length catalog violates its ordering rules
    #[error("Invalid stock length catalog: {reason}")]
    InvalidCatalog { reason: String },
}

impl TakeoffError {
    /// Create a MissingInputField error
    pub fn missing_input_field(field: impl Into<String>) -> Self {
        TakeoffError::MissingInputField {
            field: field.into(),
        }
    }

    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TakeoffError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an ExceedsCatalogRange error
    pub fn exceeds_catalog_range(required_m: f64, max_stock_m: f64) -> Self {
        TakeoffError::ExceedsCatalogRange {
            required_m,
            max_stock_m,
        }
    }

    /// Create a MissingRegionalParameter error
    pub fn missing_regional_parameter(reason: impl Into<String>) -> Self {
        TakeoffError::MissingRegionalParameter {
            reason: reason.into(),
        }
    }

    /// Create an InvalidCatalog error
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        TakeoffError::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Check whether the error points at the request payload (as opposed
    /// to library configuration such as a bad catalog)
    pub fn is_request_error(&self) -> bool {
        !matches!(self, TakeoffError::InvalidCatalog { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TakeoffError::MissingInputField { .. } => "MISSING_INPUT_FIELD",
            TakeoffError::InvalidDimension { .. } => "INVALID_DIMENSION",
            TakeoffError::ExceedsCatalogRange { .. } => "EXCEEDS_CATALOG_RANGE",
            TakeoffError::MissingRegionalParameter { .. } => "MISSING_REGIONAL_PARAMETER",
            TakeoffError::InvalidCatalog { .. } => "INVALID_CATALOG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TakeoffError::invalid_dimension("deckWidthM", "-5.0", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: TakeoffError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_tagging() {
        let error = TakeoffError::missing_input_field("deckWidthM");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"MissingInputField\""));
        assert!(json.contains("deckWidthM"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TakeoffError::missing_input_field("roofWidthM").error_code(),
            "MISSING_INPUT_FIELD"
        );
        assert_eq!(
            TakeoffError::exceeds_catalog_range(6.5, 6.0).error_code(),
            "EXCEEDS_CATALOG_RANGE"
        );
    }

    #[test]
    fn test_request_error_classification() {
        assert!(TakeoffError::missing_input_field("postCount").is_request_error());
        assert!(!TakeoffError::invalid_catalog("empty").is_request_error());
    }
}
