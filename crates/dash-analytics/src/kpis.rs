//! Scalar summary figures.

use dash_catalog::Product;
use serde::{Deserialize, Serialize};

/// Headline numbers for the KPI cards.
///
/// Averages over an empty population are 0, as are min and max when no
/// product has a listed price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total: usize,
    pub on_sale: usize,
    pub in_store: usize,
    pub online: usize,
    /// Mean of listed regular prices.
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Mean rating over rated products.
    pub avg_rating: f64,
    pub total_reviews: u64,
    /// Number of products carrying a rating.
    pub rated: usize,
}

impl Kpis {
    /// Summarize a filtered product set.
    pub fn from_products(products: &[&Product]) -> Self {
        let prices: Vec<f64> = products.iter().filter_map(|p| p.listed_price()).collect();
        let ratings: Vec<f64> = products.iter().filter_map(|p| p.rating).collect();

        let (min_price, max_price) = match prices.split_first() {
            Some((&first, rest)) => rest
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
            None => (0.0, 0.0),
        };

        Self {
            total: products.len(),
            on_sale: products.iter().filter(|p| p.on_sale).count(),
            in_store: products.iter().filter(|p| p.in_store).count(),
            online: products.iter().filter(|p| p.online).count(),
            avg_price: mean(&prices),
            min_price,
            max_price,
            avg_rating: mean(&ratings),
            total_reviews: products.iter().map(|p| u64::from(p.review_count)).sum(),
            rated: products.iter().filter(|p| p.is_rated()).count(),
        }
    }

    /// Products not on sale.
    pub fn full_price(&self) -> usize {
        self.total - self.on_sale
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: u64, price: Option<f64>, rating: Option<f64>, reviews: u32) -> Product {
        let mut p = Product::new(sku, "Sonance - Test", "Speakers");
        p.regular_price = price;
        p.rating = rating;
        p.review_count = reviews;
        p
    }

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(Kpis::from_products(&[]), Kpis::default());
    }

    #[test]
    fn test_counts() {
        let mut a = product(1, Some(100.0), None, 0);
        a.on_sale = true;
        a.sale_price = Some(80.0);
        a.in_store = true;
        let mut b = product(2, Some(300.0), None, 0);
        b.online = true;
        let products = vec![a, b];
        let refs: Vec<&Product> = products.iter().collect();

        let kpis = Kpis::from_products(&refs);
        assert_eq!(kpis.total, 2);
        assert_eq!(kpis.on_sale, 1);
        assert_eq!(kpis.full_price(), 1);
        assert_eq!(kpis.in_store, 1);
        assert_eq!(kpis.online, 1);
    }

    #[test]
    fn test_prices_skip_unlisted() {
        let products = vec![
            product(1, Some(100.0), None, 0),
            product(2, Some(0.0), None, 0),
            product(3, None, None, 0),
            product(4, Some(300.0), None, 0),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        let kpis = Kpis::from_products(&refs);
        assert_eq!(kpis.avg_price, 200.0);
        assert_eq!(kpis.min_price, 100.0);
        assert_eq!(kpis.max_price, 300.0);
    }

    #[test]
    fn test_ratings_and_reviews_independent() {
        let products = vec![
            product(1, None, Some(4.0), 0),
            product(2, None, None, 12),
            product(3, None, Some(5.0), 3),
            product(4, None, Some(0.0), 1),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        let kpis = Kpis::from_products(&refs);
        assert_eq!(kpis.rated, 3);
        assert_eq!(kpis.avg_rating, 3.0);
        assert_eq!(kpis.total_reviews, 16);
    }

    #[test]
    fn test_no_ratings_average_zero() {
        let products = vec![product(1, Some(10.0), None, 4)];
        let refs: Vec<&Product> = products.iter().collect();
        let kpis = Kpis::from_products(&refs);
        assert_eq!(kpis.avg_rating, 0.0);
        assert_eq!(kpis.rated, 0);
    }
}
