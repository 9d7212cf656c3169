//! The static product dataset.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Deserialize;
use std::collections::HashSet;

/// Fixture compiled into the crate.
const BUNDLED_PRODUCTS: &str = include_str!("../../data/products.json");

#[derive(Deserialize)]
struct Dataset {
    products: Vec<Product>,
}

/// The immutable, ordered product collection.
///
/// Built once at startup and shared read-only (typically behind an `Arc`)
/// with every client call.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(CommerceError::DuplicateProduct(product.id().to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a dataset document of the form `{ "products": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::new(dataset.products)
    }

    /// Load the dataset bundled with the crate.
    pub fn bundled() -> Result<Self, CommerceError> {
        Self::from_json(BUNDLED_PRODUCTS)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// All products in dataset order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductKind, Variation};
    use crate::money::Money;

    #[test]
    fn test_bundled_dataset_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.products()[0].id().as_str(), "p1");
    }

    #[test]
    fn test_bundled_products_satisfy_variation_invariant() {
        let catalog = Catalog::bundled().unwrap();
        for product in catalog.iter() {
            assert!(!product.variations().is_empty());
            for variation in product.variations() {
                assert!(product.kind().allows(*variation), "{} offers {}", product.id(), variation);
            }
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::bundled().unwrap();
        let tee = catalog.get(&ProductId::new("p1")).unwrap();
        assert_eq!(tee.price(), Money::from_decimal(19.99));
        assert_eq!(tee.variations(), &[Variation::Small, Variation::Medium]);
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let product = Product::new(
            "dup",
            "A",
            ProductKind::PhysicalItem,
            Money::new(100),
            vec![Variation::New],
        )
        .unwrap();
        let result = Catalog::new(vec![product.clone(), product]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id == "dup"));
    }

    #[test]
    fn test_from_json_reports_malformed_documents() {
        assert!(matches!(
            Catalog::from_json("{\"products\": 3}"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
