//! Best deals section.

use dash_analytics::SaleItem;

use crate::escape::html_escape;
use crate::format;

/// Shown when the filtered set has no qualifying sale items.
pub const NO_DEALS_MESSAGE: &str = "No sale items in this category";

const DEAL_COLOR: &str = "#10b981";

/// Render the discount chart.
pub fn render_deals(items: &[SaleItem]) -> String {
    if items.is_empty() {
        return format!(
            r#"<section class="chart-card deals" data-section="deals">
    <h2>Best Deals &ndash; Discount %</h2>
    <p class="empty-state">{NO_DEALS_MESSAGE}</p>
</section>"#
        );
    }

    let max = items.iter().map(|i| i.savings.max(0)).max().unwrap_or(0);
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="bar-row deal-row" data-sku="{sku}">
            <span class="bar-label">{name}</span>
            <div class="bar-track"><div class="bar-fill" style="width: {width:.0}%; background: {DEAL_COLOR}"></div></div>
            <span class="bar-value">{savings}%</span>
            <span class="deal-prices"><s>{regular}</s> {sale}</span>
        </div>"#,
                sku = item.sku,
                name = html_escape(&item.name),
                width = super::charts::bar_width(item.savings.max(0) as f64, max as f64),
                savings = item.savings,
                regular = format::currency(item.regular_price),
                sale = format::currency(item.sale_price),
            )
        })
        .collect();

    format!(
        r#"<section class="chart-card deals" data-section="deals">
    <h2>Best Deals &ndash; Discount %</h2>
    <div class="bar-chart">{rows}</div>
</section>"#
    )
}
