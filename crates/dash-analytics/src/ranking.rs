//! Best-deal and top-rated rankings.

use std::cmp::Ordering;

use dash_catalog::{truncate_chars, Product};
use serde::{Deserialize, Serialize};

/// Number of sale items reported.
pub const SALE_LIMIT: usize = 10;

/// Number of top-rated items reported.
pub const TOP_RATED_LIMIT: usize = 8;

/// Reviews needed before a rating counts for the top-rated table.
pub const MIN_REVIEWS: u32 = 3;

const SALE_NAME_CHARS: usize = 30;
const RATED_NAME_CHARS: usize = 50;

/// An on-sale product with its discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub sku: u64,
    /// Short display name.
    pub name: String,
    /// Whole-percent discount off the regular price.
    pub savings: i64,
    pub regular_price: f64,
    pub sale_price: f64,
}

/// A well-reviewed product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedItem {
    pub sku: u64,
    /// Short display name.
    pub name: String,
    /// Full product name, for tooltips.
    pub full_name: String,
    pub rating: f64,
    pub review_count: u32,
    pub regular_price: Option<f64>,
    pub url: String,
}

/// Display name for the deals chart: model, else the description part of
/// the name, else the name itself.
pub fn sale_label(product: &Product) -> String {
    if let Some(model) = product.model_code() {
        return model.to_string();
    }
    let base = product.name_part(1).unwrap_or(&product.name);
    truncate_chars(base, SALE_NAME_CHARS)
}

/// Display name for the top-rated table: model, else everything after the
/// brand, else the name itself.
///
/// A name with no `" - "` separator has no brand prefix to strip, so the
/// whole name is shown (truncated) instead of an empty label.
pub fn rated_label(product: &Product) -> String {
    if let Some(model) = product.model_code() {
        return model.to_string();
    }
    let base = product.name_after_brand().unwrap_or(&product.name);
    truncate_chars(base, RATED_NAME_CHARS)
}

/// On-sale products with both prices listed, biggest discount first.
pub fn rank_sales(products: &[&Product]) -> Vec<SaleItem> {
    let mut items: Vec<SaleItem> = products
        .iter()
        .filter_map(|p| {
            let savings = p.discount_percentage()?;
            Some(SaleItem {
                sku: p.sku,
                name: sale_label(p),
                savings,
                regular_price: p.listed_price()?,
                sale_price: p.listed_sale_price()?,
            })
        })
        .collect();

    items.sort_by(|a, b| b.savings.cmp(&a.savings));
    items.truncate(SALE_LIMIT);
    items
}

/// Rated products with enough reviews, by rating then review count.
pub fn rank_top_rated(products: &[&Product]) -> Vec<RatedItem> {
    let mut rated: Vec<(&Product, f64)> = products
        .iter()
        .filter(|p| p.review_count >= MIN_REVIEWS)
        .filter_map(|p| p.rating.map(|r| (*p, r)))
        .collect();

    rated.sort_by(|(pa, ra), (pb, rb)| compare_rated(*rb, pb.review_count, *ra, pa.review_count));

    rated
        .into_iter()
        .take(TOP_RATED_LIMIT)
        .map(|(p, rating)| RatedItem {
            sku: p.sku,
            name: rated_label(p),
            full_name: p.name.clone(),
            rating,
            review_count: p.review_count,
            regular_price: p.listed_price(),
            url: p.url.clone(),
        })
        .collect()
}

fn compare_rated(rating_a: f64, reviews_a: u32, rating_b: f64, reviews_b: u32) -> Ordering {
    rating_a
        .total_cmp(&rating_b)
        .then_with(|| reviews_a.cmp(&reviews_b))
}
