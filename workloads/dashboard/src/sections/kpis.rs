//! KPI cards section.

use dash_analytics::Kpis;

use crate::escape::html_escape;
use crate::format;

/// One headline figure, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    /// Highlighted in the accent colour.
    pub accent: bool,
}

/// The eight cards in display order.
pub fn kpi_cards(kpis: &Kpis) -> Vec<KpiCard> {
    let card = |label, value, accent| KpiCard {
        label,
        value,
        accent,
    };

    vec![
        card("Total Products", format::count(kpis.total as u64), false),
        card("On Sale", format::count(kpis.on_sale as u64), true),
        card("In Store", format::count(kpis.in_store as u64), false),
        card("Online", format::count(kpis.online as u64), false),
        card("Avg Price", format::currency(kpis.avg_price), false),
        card(
            "Price Range",
            format!(
                "{}-{}",
                format::currency(kpis.min_price),
                format::currency(kpis.max_price)
            ),
            false,
        ),
        card("Avg Rating", format::rating(kpis.avg_rating), true),
        card("Total Reviews", format::count(kpis.total_reviews), false),
    ]
}

/// Render the KPI card row.
pub fn render_kpis(kpis: &Kpis) -> String {
    let cards_html: String = kpi_cards(kpis)
        .iter()
        .map(|card| {
            let accent = if card.accent { " kpi-card--accent" } else { "" };
            format!(
                r#"<div class="kpi-card{accent}">
            <div class="kpi-label">{label}</div>
            <div class="kpi-value">{value}</div>
        </div>"#,
                label = card.label,
                value = html_escape(&card.value),
            )
        })
        .collect();

    format!(
        r#"<section class="kpi-grid" data-section="kpis">
    {cards_html}
</section>"#
    )
}
