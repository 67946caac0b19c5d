//! Category selection.

use dash_catalog::Product;

/// Normalize a raw filter value.
///
/// An empty category is the cleared state, same as no filter at all.
pub fn normalize(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty())
}

/// Check if a product passes the filter (exact, case-sensitive match).
pub fn matches(product: &Product, filter: Option<&str>) -> bool {
    match normalize(filter) {
        Some(category) => product.category == category,
        None => true,
    }
}

/// Products passing the filter, in catalog order.
pub fn select<'a>(products: &'a [Product], filter: Option<&str>) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, filter)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "A", "Speakers"),
            Product::new(2, "B", "Amps"),
            Product::new(3, "C", "Speakers"),
        ]
    }

    #[test]
    fn test_no_filter_selects_all() {
        let products = catalog();
        assert_eq!(select(&products, None).len(), 3);
        assert_eq!(select(&products, Some("")).len(), 3);
    }

    #[test]
    fn test_exact_match() {
        let products = catalog();
        let skus: Vec<u64> = select(&products, Some("Speakers")).iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec![1, 3]);
        assert!(select(&products, Some("speakers")).is_empty());
        assert!(select(&products, Some("Speakers ")).is_empty());
    }

    #[test]
    fn test_unmatched_filter_is_empty() {
        let products = catalog();
        assert!(select(&products, Some("Nonexistent")).is_empty());
    }
}
