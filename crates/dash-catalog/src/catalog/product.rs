//! Product record and pricing helpers.

use serde::{Deserialize, Serialize};

/// Separator between the brand, description and colour parts of a name.
pub const NAME_SEPARATOR: &str = " - ";

/// A product in the catalog.
///
/// Records are immutable once the catalog is built. Nothing here is
/// validated: a negative price or a sale price above the regular price is
/// carried through as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stock keeping unit (unique).
    pub sku: u64,
    /// Full display name (e.g., "Sonance - MAG 6.2 - Paintable White").
    pub name: String,
    /// Short model code, may be empty.
    #[serde(default)]
    pub model: String,
    /// Regular price in dollars; absent or zero for unpriced items.
    #[serde(default)]
    pub regular_price: Option<f64>,
    /// Sale price in dollars, only meaningful when `on_sale` is set.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Whether the product is currently discounted.
    #[serde(default)]
    pub on_sale: bool,
    /// Free-text category label.
    pub category: String,
    /// Available for in-store purchase.
    #[serde(default)]
    pub in_store: bool,
    /// Available for online purchase.
    #[serde(default)]
    pub online: bool,
    /// Average customer rating on a 0-5 scale.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of customer reviews.
    #[serde(default)]
    pub review_count: u32,
    /// Free-text colour label.
    #[serde(default)]
    pub color: String,
    /// External product page.
    #[serde(default)]
    pub url: String,
}

impl Product {
    /// Create a product with the required fields; everything else defaults.
    pub fn new(sku: u64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            sku,
            name: name.into(),
            model: String::new(),
            regular_price: None,
            sale_price: None,
            on_sale: false,
            category: category.into(),
            in_store: false,
            online: false,
            rating: None,
            review_count: 0,
            color: String::new(),
            url: String::new(),
        }
    }

    /// Regular price if it is listed (present, non-zero, not NaN).
    pub fn listed_price(&self) -> Option<f64> {
        self.regular_price.filter(|p| is_listed(*p))
    }

    /// Sale price if it is listed (present, non-zero, not NaN).
    pub fn listed_sale_price(&self) -> Option<f64> {
        self.sale_price.filter(|p| is_listed(*p))
    }

    /// Check if the product carries a rating.
    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Discount as a whole percentage of the regular price.
    ///
    /// Only defined for on-sale products with both prices listed. Halves
    /// round up, so 12.5% becomes 13%.
    pub fn discount_percentage(&self) -> Option<i64> {
        if !self.on_sale {
            return None;
        }
        let regular = self.listed_price()?;
        let sale = self.listed_sale_price()?;
        let pct = (regular - sale) / regular * 100.0;
        Some((pct + 0.5).floor() as i64)
    }

    /// The `index`-th part of the name split on `" - "`, if non-empty.
    pub fn name_part(&self, index: usize) -> Option<&str> {
        self.name
            .split(NAME_SEPARATOR)
            .nth(index)
            .filter(|part| !part.is_empty())
    }

    /// Everything after the first `" - "` in the name, if non-empty.
    pub fn name_after_brand(&self) -> Option<&str> {
        self.name
            .split_once(NAME_SEPARATOR)
            .map(|(_, rest)| rest)
            .filter(|rest| !rest.is_empty())
    }

    /// Model code if the product has one.
    pub fn model_code(&self) -> Option<&str> {
        Some(self.model.as_str()).filter(|m| !m.is_empty())
    }
}

fn is_listed(price: f64) -> bool {
    price != 0.0 && !price.is_nan()
}

/// Truncate a string to at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker() -> Product {
        let mut p = Product::new(
            6412345,
            "Sonance - MAG Series 6.5\" In-Ceiling Speaker - White",
            "In-Ceiling Speakers",
        );
        p.regular_price = Some(200.0);
        p
    }

    #[test]
    fn test_listed_price() {
        let mut p = speaker();
        assert_eq!(p.listed_price(), Some(200.0));

        p.regular_price = Some(0.0);
        assert_eq!(p.listed_price(), None);

        p.regular_price = None;
        assert_eq!(p.listed_price(), None);

        p.regular_price = Some(f64::NAN);
        assert_eq!(p.listed_price(), None);
    }

    #[test]
    fn test_discount_percentage() {
        let mut p = speaker();
        p.sale_price = Some(150.0);
        assert_eq!(p.discount_percentage(), None);

        p.on_sale = true;
        assert_eq!(p.discount_percentage(), Some(25));

        p.sale_price = Some(175.0);
        assert_eq!(p.discount_percentage(), Some(13)); // 12.5 rounds up

        p.sale_price = None;
        assert_eq!(p.discount_percentage(), None);
    }

    #[test]
    fn test_discount_negative_when_sale_above_regular() {
        let mut p = speaker();
        p.on_sale = true;
        p.sale_price = Some(230.0);
        assert_eq!(p.discount_percentage(), Some(-15));
    }

    #[test]
    fn test_name_parts() {
        let p = speaker();
        assert_eq!(p.name_part(0), Some("Sonance"));
        assert_eq!(p.name_part(1), Some("MAG Series 6.5\" In-Ceiling Speaker"));
        assert_eq!(p.name_part(3), None);
        assert_eq!(
            p.name_after_brand(),
            Some("MAG Series 6.5\" In-Ceiling Speaker - White")
        );

        let plain = Product::new(1, "Volume Control", "Accessories");
        assert_eq!(plain.name_part(1), None);
        assert_eq!(plain.name_after_brand(), None);
    }

    #[test]
    fn test_is_rated() {
        let mut p = speaker();
        assert!(!p.is_rated());
        p.rating = Some(4.5);
        assert!(p.is_rated());
    }

    #[test]
    fn test_model_code() {
        let mut p = speaker();
        assert_eq!(p.model_code(), None);
        p.model = "MAG6R".to_string();
        assert_eq!(p.model_code(), Some("MAG6R"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "sku": 42,
            "name": "Sonance - Amp",
            "regularPrice": 999.99,
            "onSale": false,
            "category": "Amplifiers",
            "inStore": true,
            "online": true,
            "rating": null
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.sku, 42);
        assert_eq!(p.regular_price, Some(999.99));
        assert!(p.in_store);
        assert_eq!(p.rating, None);
        assert_eq!(p.review_count, 0);
        assert!(p.model.is_empty());
    }
}
