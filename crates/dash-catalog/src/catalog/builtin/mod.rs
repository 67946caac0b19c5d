//! Built-in static catalog.
//!
//! The catalog is the concatenation of five fixed sub-lists, in order.

mod part1;
mod part2;
mod part3;
mod part4;
mod part5;

use crate::catalog::Product;

/// Compact static form of a product record.
pub(crate) struct Seed {
    pub sku: u64,
    pub name: &'static str,
    pub model: &'static str,
    pub category: &'static str,
    pub color: &'static str,
    pub regular_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub in_store: bool,
    pub online: bool,
}

impl From<&Seed> for Product {
    fn from(seed: &Seed) -> Self {
        Product {
            sku: seed.sku,
            name: seed.name.to_string(),
            model: seed.model.to_string(),
            regular_price: seed.regular_price,
            sale_price: seed.sale_price,
            on_sale: seed.sale_price.is_some(),
            category: seed.category.to_string(),
            in_store: seed.in_store,
            online: seed.online,
            rating: seed.rating,
            review_count: seed.review_count,
            color: seed.color.to_string(),
            url: format!("https://www.bestbuy.com/site/{0}.p?skuId={0}", seed.sku),
        }
    }
}

/// All built-in products in catalog order.
pub(crate) fn products() -> Vec<Product> {
    [part1::SEEDS, part2::SEEDS, part3::SEEDS, part4::SEEDS, part5::SEEDS]
        .iter()
        .flat_map(|part| part.iter())
        .map(Product::from)
        .collect()
}
