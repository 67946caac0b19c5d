//! The derived report.

use dash_catalog::Product;
use serde::{Deserialize, Serialize};

use crate::facets::{category_breakdown, color_breakdown, FacetValue};
use crate::filter;
use crate::histogram::{price_distribution, PriceBucketCount};
use crate::kpis::Kpis;
use crate::ranking::{rank_sales, rank_top_rated, RatedItem, SaleItem};

/// Everything a dashboard view needs for one filter state.
///
/// All series come from the same filtered snapshot. A report is rebuilt on
/// every filter change and never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Category the report was computed for (`None` means all).
    pub filter: Option<String>,
    pub kpis: Kpis,
    pub category_data: Vec<FacetValue>,
    pub color_data: Vec<FacetValue>,
    pub price_distribution: Vec<PriceBucketCount>,
    pub sale_products: Vec<SaleItem>,
    pub top_rated: Vec<RatedItem>,
}

impl Report {
    /// Check if the filter matched nothing.
    pub fn is_empty(&self) -> bool {
        self.kpis.total == 0
    }
}

/// Compute the full report for a catalog and an optional category filter.
///
/// A filter matching nothing yields zero counts and empty series.
pub fn compute_report(products: &[Product], category: Option<&str>) -> Report {
    let category = filter::normalize(category);
    let selected = filter::select(products, category);

    let report = Report {
        filter: category.map(str::to_string),
        kpis: Kpis::from_products(&selected),
        category_data: category_breakdown(&selected),
        color_data: color_breakdown(&selected),
        price_distribution: price_distribution(&selected),
        sale_products: rank_sales(&selected),
        top_rated: rank_top_rated(&selected),
    };

    tracing::debug!(
        filter = category.unwrap_or("all"),
        total = report.kpis.total,
        categories = report.category_data.len(),
        on_sale = report.kpis.on_sale,
        "computed report"
    );

    report
}
