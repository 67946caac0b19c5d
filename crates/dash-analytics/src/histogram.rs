//! Fixed price histogram.

use dash_catalog::Product;
use serde::{Deserialize, Serialize};

/// A half-open price range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    /// Chart label.
    pub range: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl PriceBucket {
    pub const fn new(range: &'static str, min: f64, max: f64) -> Self {
        Self { range, min, max }
    }

    /// Check if a price falls into this bucket.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price < self.max
    }
}

/// The six dashboard buckets, in display order.
pub const PRICE_BUCKETS: [PriceBucket; 6] = [
    PriceBucket::new("< $100", 0.0, 100.0),
    PriceBucket::new("$100-$500", 100.0, 500.0),
    PriceBucket::new("$500-$1K", 500.0, 1000.0),
    PriceBucket::new("$1K-$2K", 1000.0, 2000.0),
    PriceBucket::new("$2K-$3K", 2000.0, 3000.0),
    PriceBucket::new("$3K+", 3000.0, f64::INFINITY),
];

/// Number of products in one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucketCount {
    pub range: String,
    pub count: usize,
}

/// Count products per bucket.
///
/// Only listed prices are counted: absent and zero prices fall into no
/// bucket, and neither do negative ones.
pub fn price_distribution(products: &[&Product]) -> Vec<PriceBucketCount> {
    let prices: Vec<f64> = products.iter().filter_map(|p| p.listed_price()).collect();

    PRICE_BUCKETS
        .iter()
        .map(|bucket| PriceBucketCount {
            range: bucket.range.to_string(),
            count: prices.iter().filter(|&&price| bucket.contains(price)).count(),
        })
        .collect()
}
