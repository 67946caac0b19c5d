//! Product catalog module.
//!
//! Contains the product record, the immutable catalog container and the
//! sources a catalog can be loaded from.

mod builtin;
mod product;
mod source;

pub use product::{truncate_chars, Product, NAME_SEPARATOR};
pub use source::{BuiltinSource, CatalogSource, JsonFileSource};

use std::ops::Deref;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::CatalogError;

/// An ordered, immutable sequence of products.
///
/// Order is significant: it is the order records were supplied in, and
/// grouping ties downstream are broken by first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in static catalog, constructed once per process.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog::new(builtin::products()))
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by SKU.
    pub fn find(&self, sku: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }
}

impl Deref for Catalog {
    type Target = [Product];

    fn deref(&self) -> &[Product] {
        &self.products
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_is_shared() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }

    #[test]
    fn test_builtin_skus_unique() {
        let catalog = Catalog::builtin();
        let skus: HashSet<u64> = catalog.iter().map(|p| p.sku).collect();
        assert_eq!(skus.len(), catalog.len());
    }

    #[test]
    fn test_builtin_sale_prices_below_regular() {
        for p in Catalog::builtin().iter().filter(|p| p.on_sale) {
            let regular = p.regular_price.unwrap();
            let sale = p.sale_price.unwrap();
            assert!(sale < regular, "sku {} sale {} >= regular {}", p.sku, sale, regular);
        }
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"[
            {"sku": 3, "name": "C", "category": "Amps"},
            {"sku": 1, "name": "A", "category": "Speakers"},
            {"sku": 2, "name": "B", "category": "Speakers"}
        ]"#;
        let catalog = Catalog::from_json_str(json, "inline").unwrap();
        let skus: Vec<u64> = catalog.iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec![3, 1, 2]);
        assert_eq!(catalog.find(1).map(|p| p.name.as_str()), Some("A"));
        assert!(catalog.find(9).is_none());
    }

    #[test]
    fn test_from_json_passes_malformed_records_through() {
        let json = r#"[{"sku": 7, "name": "Odd", "category": "X", "regularPrice": -5}]"#;
        let catalog = Catalog::from_json_str(json, "inline").unwrap();
        assert_eq!(catalog[0].regular_price, Some(-5.0));
    }

    #[test]
    fn test_from_json_error() {
        let err = Catalog::from_json_str("{not json", "broken.json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/definitely/not/here/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
