//! # Validation Module
//!
//! Checks catalog data before it reaches a register.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  till.toml [[products]] ──► serde (types)                              │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                   validate_catalog ← THIS MODULE                        │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                   InMemoryCatalog ──► Register::scan                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The register itself trusts its catalog; bad product data is rejected here,
//! at load time.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_CODE_LEN: usize = 50;
const MAX_DESCRIPTION_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product short code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Letters, digits, spaces, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_code;
///
/// assert!(validate_code("led lamp").is_ok());
/// assert!(validate_code("").is_err());
/// assert!(validate_code("lamp;drop").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, spaces, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a receipt description.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a list price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Product / Catalog Validators
// =============================================================================

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_code(&product.code)?;
    validate_description(&product.description)?;
    validate_price(product.price)
}

/// Validates a whole catalog: every product, and unique barcodes.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product(product)?;

        if !seen.insert(product.barcode) {
            return Err(ValidationError::Duplicate {
                field: "barcode".to_string(),
                value: product.barcode.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Barcode;

    fn product(code: &str, description: &str, price: i64, barcode: i64) -> Product {
        Product::new(code, description, Money::from_cents(price), Barcode::new(barcode), false)
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code("led lamp").is_ok());
        assert!(validate_code("cheese_48").is_ok());
        assert!(validate_code("A-1").is_ok());

        assert!(validate_code("").is_err());
        assert!(validate_code("   ").is_err());
        assert!(validate_code("semi;colon").is_err());
        assert!(validate_code(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Gouda 48+").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(250)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_barcodes() {
        let catalog = [
            product("lamp", "Led Lamp", 250, 1234),
            product("banana", "Bananas Fyffes", 150, 9234),
            product("other lamp", "Other Lamp", 300, 1234),
        ];

        assert_eq!(
            validate_catalog(&catalog),
            Err(ValidationError::Duplicate {
                field: "barcode".to_string(),
                value: "1234".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_catalog_rejects_bad_product() {
        let catalog = [product("lamp", "", 250, 1234)];
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_catalog_ok() {
        let catalog = [
            product("lamp", "Led Lamp", 250, 1234),
            product("banana", "Bananas Fyffes", 150, 9234),
        ];
        assert!(validate_catalog(&catalog).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }
}
