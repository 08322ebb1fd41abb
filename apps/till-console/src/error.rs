//! # App Error Type
//!
//! Unified error type for the console app.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Startup (fatal)                   Session (reported, loop continues)   │
//! │  ───────────────                   ──────────────────────────────────   │
//! │  Io / ConfigParse / InvalidConfig  Register (UnknownProduct, ...)      │
//! │  Journal                           InvalidCommand                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use till_core::{RegisterError, ValidationError};

/// Errors raised by the console app.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// till.toml could not be parsed.
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// till.toml parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Journal encoding failed: {0}")]
    Journal(#[from] serde_json::Error),

    #[error(transparent)]
    Register(#[from] RegisterError),

    /// Cashier typed something the session does not understand.
    #[error("{0}")]
    InvalidCommand(String),
}

impl AppError {
    /// Whether the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Register(_) | AppError::InvalidCommand(_))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::Barcode;

    #[test]
    fn test_register_errors_are_recoverable() {
        let err: AppError = RegisterError::UnknownProduct {
            barcode: Barcode::new(5353),
        }
        .into();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "No product found! (barcode 5353)");

        let err: AppError = RegisterError::UnknownBestBeforeDate.into();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_startup_errors_are_fatal() {
        let err: AppError = std::io::Error::other("disk gone").into();
        assert!(!err.is_recoverable());

        let err: AppError = ValidationError::Required {
            field: "description".to_string(),
        }
        .into();
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Invalid configuration: description is required");
    }
}
