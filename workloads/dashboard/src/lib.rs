//! Catalog Dashboard Page - static HTML rendering of an analytics report.
//!
//! This workload renders:
//! - A header with the active category filter
//! - Eight KPI cards
//! - Category, colour and price charts
//! - Best deals and top rated products
//! - The category filter menu
//!
//! Every section is a pure function from report data to an HTML fragment
//! marked with a `data-section` attribute. `render_page` assembles them into
//! a complete document.

mod escape;
pub mod format;
pub mod sections;

use chrono::{DateTime, Utc};
use dash_analytics::{DashboardSession, FacetValue, Report};

pub use escape::html_escape;
pub use sections::{
    kpi_cards, render_categories, render_colors, render_deals, render_filter_menu, render_header,
    render_kpis, render_price_distribution, render_top_rated, KpiCard, NO_DEALS_MESSAGE,
};

/// Default page title.
pub const DEFAULT_TITLE: &str = "Sonance Best Buy Dashboard";

/// Everything needed to render one dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub title: &'a str,
    /// Size of the whole catalog, not of the filtered set.
    pub catalog_size: usize,
    /// Unfiltered category menu.
    pub menu: &'a [FacetValue],
    pub report: &'a Report,
    pub generated_at: DateTime<Utc>,
}

impl<'a> DashboardView<'a> {
    pub fn new(
        title: &'a str,
        catalog_size: usize,
        menu: &'a [FacetValue],
        report: &'a Report,
    ) -> Self {
        Self {
            title,
            catalog_size,
            menu,
            report,
            generated_at: Utc::now(),
        }
    }

    /// View of a session's current state.
    pub fn from_session(title: &'a str, session: &'a DashboardSession<'_>) -> Self {
        Self::new(
            title,
            session.products().len(),
            session.menu(),
            session.report(),
        )
    }

    /// Pin the generation timestamp.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// The category the report was computed for.
    pub fn selected(&self) -> Option<&'a str> {
        self.report.filter.as_deref()
    }
}

/// Render the complete dashboard document.
pub fn render_page(view: &DashboardView<'_>) -> String {
    let report = view.report;
    let selected = view.selected();

    let sections = [
        render_header(view.title, view.catalog_size, selected),
        render_kpis(&report.kpis),
        r#"<div class="grid grid-3">"#.to_string(),
        render_categories(&report.category_data),
        render_colors(&report.color_data),
        "</div>\n<div class=\"grid grid-2\">".to_string(),
        render_price_distribution(&report.price_distribution),
        render_deals(&report.sale_products),
        "</div>\n<div class=\"grid grid-3\">".to_string(),
        render_top_rated(&report.top_rated),
        render_filter_menu(view.menu, selected),
        "</div>".to_string(),
    ];

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generator" content="dash">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
<main class="dashboard" data-filter="{filter}">
{sections}
<footer class="dashboard-footer">Generated {generated}</footer>
</main>
</body>
</html>
"#,
        title = html_escape(view.title),
        styles = DASHBOARD_STYLES,
        filter = html_escape(selected.unwrap_or("")),
        sections = sections.join("\n"),
        generated = view.generated_at.format("%Y-%m-%d %H:%M UTC"),
    );

    tracing::debug!(
        filter = selected.unwrap_or("all"),
        bytes = html.len(),
        "rendered dashboard page"
    );

    html
}

const DASHBOARD_STYLES: &str = r##"
:root {
    --accent: #00A3E1;
    --charcoal: #343d46;
    --silver: #e2e2e2;
    --muted: #718096;
    --card-bg: rgba(255, 255, 255, 0.85);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--charcoal);
    background: linear-gradient(135deg, #F5F5F5 0%, #e8ecef 50%, #F5F5F5 100%);
    min-height: 100vh;
}

.dashboard { max-width: 1400px; margin: 0 auto; padding: 2rem; display: flex; flex-direction: column; gap: 1.25rem; }

.dashboard-header { display: flex; flex-wrap: wrap; align-items: flex-end; justify-content: space-between; gap: 0.75rem; }
.dashboard-header h1 { font-weight: 300; font-size: 1.875rem; }
.dashboard-subtitle { font-size: 0.875rem; color: var(--muted); }
.accent-bar { width: 100%; height: 3px; background: linear-gradient(90deg, var(--accent), transparent); }
.clear-filter { background: var(--accent); color: white; border: none; border-radius: 9999px; padding: 0.5rem 1rem; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; }

.kpi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 0.75rem; }
.kpi-card, .chart-card, .table-card, .filter-menu { background: var(--card-bg); border-radius: 1rem; padding: 1.25rem; box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05); }
.kpi-label { font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.05em; color: var(--muted); }
.kpi-value { font-size: 1.5rem; font-weight: 500; }
.kpi-card--accent .kpi-value { color: var(--accent); }

.grid { display: grid; gap: 1.25rem; }
.grid-2 { grid-template-columns: repeat(2, 1fr); }
.grid-3 { grid-template-columns: 2fr 1fr; }

h2 { font-size: 0.875rem; font-weight: 500; text-transform: uppercase; letter-spacing: 0.05em; margin-bottom: 1rem; }

.bar-chart { display: flex; flex-direction: column; gap: 0.4rem; }
.bar-row { display: grid; grid-template-columns: 160px 1fr 48px; align-items: center; gap: 0.5rem; font-size: 0.75rem; }
.deal-row { grid-template-columns: 160px 1fr 48px 110px; }
.bar-track { background: #f3f3f3; border-radius: 6px; height: 14px; overflow: hidden; }
.bar-fill { height: 100%; border-radius: 0 6px 6px 0; }
.bar-value { text-align: right; color: var(--muted); }
.legend-swatch { display: inline-block; width: 10px; height: 10px; border-radius: 50%; }
.legend-row { grid-template-columns: 12px 150px 1fr 48px; }
.deal-prices { color: var(--muted); }
.empty-state { font-size: 0.875rem; font-style: italic; color: #9ca3af; }

.top-rated { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.top-rated th { text-align: left; font-size: 0.7rem; font-weight: 500; text-transform: uppercase; color: var(--muted); padding: 0.5rem 0; border-bottom: 1px solid var(--silver); }
.top-rated td { padding: 0.6rem 0; border-bottom: 1px solid #f3f3f3; }
.top-rated .num { text-align: right; }
.top-rated .rating { color: var(--accent); font-weight: 500; }
.top-rated .muted { color: var(--muted); }
.product-cell { max-width: 300px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; padding-right: 1rem; }
.product-cell a { color: var(--charcoal); text-decoration: none; }

.menu-items { display: flex; flex-direction: column; gap: 0.375rem; max-height: 300px; overflow-y: auto; }
.menu-item { display: flex; justify-content: space-between; width: 100%; border: none; border-radius: 0.5rem; padding: 0.5rem 0.75rem; background: rgba(0, 0, 0, 0.02); color: var(--charcoal); font-size: 0.875rem; text-align: left; }
.menu-item--active { background: var(--accent); color: white; }
.menu-count { font-size: 0.75rem; border-radius: 9999px; padding: 0.1rem 0.5rem; background: rgba(0, 163, 225, 0.1); }

.dashboard-footer { font-size: 0.75rem; color: var(--muted); text-align: right; }

@media (max-width: 900px) {
    .grid-2, .grid-3 { grid-template-columns: 1fr; }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dash_analytics::{category_menu, compute_report};
    use dash_catalog::Catalog;

    const SECTIONS: [&str; 8] = [
        "header",
        "kpis",
        "categories",
        "colors",
        "price-distribution",
        "deals",
        "top-rated",
        "filter-menu",
    ];

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_page_has_every_section() {
        let catalog = Catalog::builtin();
        let menu = category_menu(catalog);
        let report = compute_report(catalog, None);
        let view = DashboardView::new(DEFAULT_TITLE, catalog.len(), &menu, &report)
            .with_generated_at(fixed_time());

        let html = render_page(&view);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sonance Best Buy Dashboard</title>"));
        for section in SECTIONS {
            assert!(
                html.contains(&format!(r#"data-section="{section}""#)),
                "missing section {section}"
            );
        }
        assert!(html.contains("Generated 2026-02-01 09:30 UTC"));
        assert!(!html.contains("Clear Filter"));
    }

    #[test]
    fn test_filtered_page() {
        let catalog = Catalog::builtin();
        let menu = category_menu(catalog);
        let report = compute_report(catalog, Some("Subwoofers"));
        let view = DashboardView::new(DEFAULT_TITLE, catalog.len(), &menu, &report);

        let html = render_page(&view);
        assert_eq!(view.selected(), Some("Subwoofers"));
        assert!(html.contains("Clear Filter: Subwoofers"));
        assert!(html.contains(r#"data-filter="Subwoofers""#));
        assert!(html.contains(&format!("{} products", catalog.len())));
    }

    #[test]
    fn test_unmatched_filter_renders_placeholders() {
        let catalog = Catalog::builtin();
        let menu = category_menu(catalog);
        let report = compute_report(catalog, Some("Nonexistent"));
        let html = render_page(&DashboardView::new("Dash", catalog.len(), &menu, &report));

        assert!(html.contains(NO_DEALS_MESSAGE));
        assert!(html.contains("No rated products in this category"));
        assert!(html.contains("$0-$0"));
    }

    #[test]
    fn test_view_from_session() {
        let mut session = DashboardSession::new(Catalog::builtin());
        session.select("Soundbars");
        let view = DashboardView::from_session(DEFAULT_TITLE, &session);

        assert_eq!(view.catalog_size, Catalog::builtin().len());
        assert_eq!(view.selected(), Some("Soundbars"));
        assert_eq!(view.menu.len(), session.menu().len());
    }
}
