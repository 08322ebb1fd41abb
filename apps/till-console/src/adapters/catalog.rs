//! In-memory product catalog.

use std::collections::HashMap;

use till_core::validation::validate_catalog;
use till_core::{Barcode, Product, ProductCatalog, ValidationError};
use tracing::trace;

/// Catalog backed by a barcode index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<Barcode, Product>,
}

impl InMemoryCatalog {
    /// Builds a catalog from validated product data.
    pub fn new(products: Vec<Product>) -> Result<Self, ValidationError> {
        validate_catalog(&products)?;

        let products = products
            .into_iter()
            .map(|product| (product.barcode, product))
            .collect();
        Ok(InMemoryCatalog { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn lookup_product(&self, barcode: Barcode) -> Option<Product> {
        let found = self.products.get(&barcode).cloned();
        trace!(%barcode, found = found.is_some(), "Catalog lookup");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::Money;

    fn lamp() -> Product {
        Product::new("led lamp", "Led Lamp", Money::from_cents(250), Barcode::new(1234), false)
    }

    #[test]
    fn test_lookup() {
        let catalog = InMemoryCatalog::new(vec![lamp()]).unwrap();

        assert_eq!(catalog.lookup_product(Barcode::new(1234)), Some(lamp()));
        assert_eq!(catalog.lookup_product(Barcode::new(5353)), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_rejects_invalid_products() {
        let mut broken = lamp();
        broken.price = Money::from_cents(-1);

        assert!(InMemoryCatalog::new(vec![broken]).is_err());
        assert!(InMemoryCatalog::new(vec![lamp(), lamp()]).is_err());
    }
}
