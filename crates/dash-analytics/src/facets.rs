//! Grouped counts over free-text fields.
//!
//! Category and colour are not enumerations; their values are discovered
//! from the data in a single pass.

use std::collections::HashMap;

use dash_catalog::{truncate_chars, Product};
use serde::{Deserialize, Serialize};

/// Labels longer than this are shortened for display.
pub const LABEL_MAX_CHARS: usize = 25;

/// Characters kept from a shortened label before the ellipsis.
pub const LABEL_KEEP_CHARS: usize = 22;

/// Number of colours reported.
pub const COLOR_LIMIT: usize = 8;

/// A single grouped value with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetValue {
    /// Display label, possibly shortened.
    pub label: String,
    /// The untouched value; use this when selecting a filter.
    pub full_label: String,
    /// Number of products with this value.
    pub count: usize,
}

impl FacetValue {
    /// Create a value whose display label is the full value.
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            full_label: value,
            count,
        }
    }

    /// Create a value with a display label shortened to fit chart axes.
    pub fn shortened(value: impl Into<String>, count: usize) -> Self {
        let value = value.into();
        Self {
            label: shorten_label(&value),
            full_label: value,
            count,
        }
    }

    /// Check if the display label differs from the full value.
    pub fn is_shortened(&self) -> bool {
        self.label != self.full_label
    }
}

/// Shorten a label to 22 characters plus `"..."` when it exceeds 25.
pub fn shorten_label(value: &str) -> String {
    if value.chars().count() > LABEL_MAX_CHARS {
        format!("{}...", truncate_chars(value, LABEL_KEEP_CHARS))
    } else {
        value.to_string()
    }
}

/// Count products per key, sorted by count descending.
///
/// Equal counts keep the order in which their key first appeared.
pub fn count_by<'a, I, F>(products: I, key: F) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a Product>,
    F: Fn(&'a Product) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for product in products {
        let value = key(product);
        match index.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable, which keeps first-occurrence order for ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Category breakdown with display labels shortened.
pub fn category_breakdown(products: &[&Product]) -> Vec<FacetValue> {
    count_by(products.iter().copied(), |p| p.category.as_str())
        .into_iter()
        .map(|(value, count)| FacetValue::shortened(value, count))
        .collect()
}

/// The most common colours, at most [`COLOR_LIMIT`].
pub fn color_breakdown(products: &[&Product]) -> Vec<FacetValue> {
    count_by(products.iter().copied(), |p| p.color.as_str())
        .into_iter()
        .take(COLOR_LIMIT)
        .map(|(value, count)| FacetValue::new(value, count))
        .collect()
}

/// Category counts over the whole, unfiltered catalog.
///
/// This backs the filter menu, so labels are left intact.
pub fn category_menu(products: &[Product]) -> Vec<FacetValue> {
    count_by(products, |p| p.category.as_str())
        .into_iter()
        .map(|(value, count)| FacetValue::new(value, count))
        .collect()
}
