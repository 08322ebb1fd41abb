//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── RegisterError    - Recoverable register operation failures        │
//! │  └── ValidationError  - Catalog / pricing data failures                │
//! │                                                                         │
//! │  till-console errors (app)                                             │
//! │  └── AppError         - Config, IO, journal, wrapped core errors       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Register errors leave the open transaction in place, so the caller can
//! report them and carry on (or retry the finalize).

use thiserror::Error;

use crate::types::Barcode;

// =============================================================================
// Register Error
// =============================================================================

/// Failures of [`Register`](crate::Register) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The catalog has no product for the scanned barcode.
    ///
    /// ## User Workflow
    /// ```text
    /// scan(5353)
    ///      │
    ///      ▼
    /// catalog.lookup_product(5353) → None
    ///      │
    ///      ├──► display: "No product found!"
    ///      │
    ///      ▼
    /// Err(UnknownProduct { barcode: 5353 })
    /// ```
    #[error("No product found! (barcode {barcode})")]
    UnknownProduct { barcode: Barcode },

    /// A price correction was requested without a best-before date.
    #[error("Best before date must not be null!")]
    UnknownBestBeforeDate,

    /// The sales service could not record a sale during finalize.
    ///
    /// The rejected record and every record after it stay in the register.
    #[error("Sale of {barcode} not recorded: {reason}")]
    SaleNotRecorded { barcode: Barcode, reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog and pricing data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two products sharing a barcode).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BEST_BEFORE_REQUIRED_MESSAGE, NO_PRODUCT_FOUND_MESSAGE};

    #[test]
    fn test_unknown_product_message() {
        let err = RegisterError::UnknownProduct {
            barcode: Barcode::new(5353),
        };
        assert_eq!(err.to_string(), "No product found! (barcode 5353)");
        assert!(err.to_string().contains(NO_PRODUCT_FOUND_MESSAGE));
    }

    #[test]
    fn test_unknown_best_before_message() {
        let err = RegisterError::UnknownBestBeforeDate;
        assert_eq!(err.to_string(), BEST_BEFORE_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "description".to_string(),
        };
        assert_eq!(err.to_string(), "description is required");

        let err = ValidationError::Duplicate {
            field: "barcode".to_string(),
            value: "1234".to_string(),
        };
        assert_eq!(err.to_string(), "barcode '1234' already exists");
    }
}
