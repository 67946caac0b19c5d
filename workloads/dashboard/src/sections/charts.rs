//! Chart sections - category bars, colour legend and price histogram.
//!
//! Charts are drawn as rows of CSS bars whose widths are proportional to the
//! largest value in the series.

use dash_analytics::{FacetValue, PriceBucketCount};

use crate::escape::html_escape;

/// Palette cycled through by the colour chart.
pub const SERIES_COLORS: [&str; 10] = [
    "#00A3E1", "#343d46", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
    "#f97316", "#6366f1",
];

const ACCENT: &str = "#00A3E1";

/// Render the products-by-category bar chart.
pub fn render_categories(series: &[FacetValue]) -> String {
    let max = series.iter().map(|v| v.count).max().unwrap_or(0);
    let rows: String = series
        .iter()
        .map(|v| {
            format!(
                r#"<div class="bar-row" data-full-name="{full}" title="{full}">
            <span class="bar-label">{label}</span>
            {bar}
        </div>"#,
                full = html_escape(&v.full_label),
                label = html_escape(&v.label),
                bar = bar(v.count, max, ACCENT),
            )
        })
        .collect();

    chart_card("categories", "Products by Category", &rows, series.is_empty())
}

/// Render the colour distribution with its legend.
pub fn render_colors(series: &[FacetValue]) -> String {
    let max = series.iter().map(|v| v.count).max().unwrap_or(0);
    let rows: String = series
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            format!(
                r#"<div class="bar-row legend-row">
            <span class="legend-swatch" style="background: {color}"></span>
            <span class="bar-label">{label} ({count})</span>
            {bar}
        </div>"#,
                label = html_escape(&v.label),
                count = v.count,
                bar = bar(v.count, max, color),
            )
        })
        .collect();

    chart_card("colors", "Color Distribution", &rows, series.is_empty())
}

/// Render the price histogram.
///
/// Every bucket is drawn, including empty ones, so the axis stays fixed.
pub fn render_price_distribution(buckets: &[PriceBucketCount]) -> String {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let rows: String = buckets
        .iter()
        .map(|b| {
            format!(
                r#"<div class="bar-row" data-range="{range}">
            <span class="bar-label">{range}</span>
            {bar}
        </div>"#,
                range = html_escape(&b.range),
                bar = bar(b.count, max, ACCENT),
            )
        })
        .collect();

    chart_card("price-distribution", "Price Distribution", &rows, buckets.is_empty())
}

/// A single proportional bar with its value.
pub(crate) fn bar(value: usize, max: usize, color: &str) -> String {
    format!(
        r#"<div class="bar-track"><div class="bar-fill" style="width: {:.0}%; background: {}"></div></div>
            <span class="bar-value">{}</span>"#,
        bar_width(value as f64, max as f64),
        color,
        value
    )
}

/// Bar width as a percentage of the series maximum.
pub(crate) fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

fn chart_card(section: &str, heading: &str, rows: &str, empty: bool) -> String {
    let body = if empty {
        r#"<p class="empty-state">No products in this category</p>"#.to_string()
    } else {
        format!(r#"<div class="bar-chart">{rows}</div>"#)
    };

    format!(
        r#"<section class="chart-card" data-section="{section}">
    <h2>{heading}</h2>
    {body}
</section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(5.0, 10.0), 50.0);
        assert_eq!(bar_width(10.0, 10.0), 100.0);
        assert_eq!(bar_width(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_categories_keep_full_name() {
        let series = vec![
            FacetValue::shortened("Whole Home Audio Installation Accessories", 4),
            FacetValue::shortened("Subwoofers", 2),
        ];
        let html = render_categories(&series);
        assert!(html.contains(r#"data-section="categories""#));
        assert!(html.contains(r#"data-full-name="Whole Home Audio Installation Accessories""#));
        assert!(html.contains(">Whole Home Audio Insta...<"));
        assert!(html.contains("width: 100%"));
        assert!(html.contains("width: 50%"));
    }

    #[test]
    fn test_colors_cycle_palette() {
        let series: Vec<FacetValue> = (0..3)
            .map(|i| FacetValue::new(format!("Color {i}"), 3 - i))
            .collect();
        let html = render_colors(&series);
        assert!(html.contains(SERIES_COLORS[0]));
        assert!(html.contains(SERIES_COLORS[2]));
        assert!(html.contains("Color 1 (2)"));
    }

    #[test]
    fn test_price_distribution_draws_empty_buckets() {
        let buckets = vec![
            PriceBucketCount {
                range: "< $100".to_string(),
                count: 0,
            },
            PriceBucketCount {
                range: "$100-$500".to_string(),
                count: 3,
            },
        ];
        let html = render_price_distribution(&buckets);
        assert!(html.contains("&lt; $100"));
        assert!(html.contains("width: 0%"));
        assert_eq!(html.matches(r#"class="bar-row""#).count(), 2);
    }

    #[test]
    fn test_empty_series_placeholder() {
        let html = render_categories(&[]);
        assert!(html.contains("No products in this category"));
        assert!(!html.contains("bar-chart"));
    }
}
