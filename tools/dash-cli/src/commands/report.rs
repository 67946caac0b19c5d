//! Report command.

use anyhow::Result;
use chrono::{DateTime, Utc};
use dash_analytics::Report;
use dashboard::format;
use serde::Serialize;

use super::ReportArgs;
use crate::context::Context;

const LABEL_WIDTH: usize = 28;

/// JSON shape printed by `dash report --json`.
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    pub generated_at: DateTime<Utc>,
    pub catalog: &'a str,
    pub report: &'a Report,
}

/// Run the report command.
pub fn run(args: ReportArgs, ctx: &Context) -> Result<()> {
    let (catalog, description) = ctx.load_catalog()?;
    let report = ctx.compute(&catalog, args.category.as_deref());

    ctx.logger
        .info_builder("report computed")
        .field("filter", report.filter.as_deref().unwrap_or("all"))
        .field_u64("total", report.kpis.total as u64)
        .field_f64("avg_price", report.kpis.avg_price)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&ReportEnvelope {
            generated_at: Utc::now(),
            catalog: &description,
            report: &report,
        });
        return Ok(());
    }

    if let Some(category) = &report.filter {
        if report.is_empty() {
            ctx.logger
                .warn_builder("no products match filter")
                .field("filter", category.as_str())
                .emit();
            ctx.output.warn(&format!(
                "No products in category '{}'. Run `dash categories` to list them.",
                category
            ));
        }
    }

    ctx.output.info(&format!("Catalog: {} ({} products)", description, catalog.len()));
    print_report(ctx, &report);

    Ok(())
}

/// Print the KPI cards as key-value pairs.
pub fn print_kpis(ctx: &Context, report: &Report) {
    let title = match &report.filter {
        Some(category) => format!("Summary: {}", category),
        None => "Summary: all categories".to_string(),
    };
    ctx.output.header(&title);

    for card in dashboard::kpi_cards(&report.kpis) {
        ctx.output.kv(card.label, &card.value);
    }
}

/// Print every report series.
pub fn print_report(ctx: &Context, report: &Report) {
    print_kpis(ctx, report);

    ctx.output.header("Products by Category");
    let max = report.category_data.iter().map(|v| v.count).max().unwrap_or(0);
    for value in &report.category_data {
        ctx.output.bar_row(&value.label, value.count, max, LABEL_WIDTH);
    }

    ctx.output.header("Color Distribution");
    let max = report.color_data.iter().map(|v| v.count).max().unwrap_or(0);
    for value in &report.color_data {
        ctx.output.bar_row(&value.label, value.count, max, LABEL_WIDTH);
    }

    ctx.output.header("Price Distribution");
    let max = report
        .price_distribution
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for bucket in &report.price_distribution {
        ctx.output.bar_row(&bucket.range, bucket.count, max, LABEL_WIDTH);
    }

    ctx.output.header("Best Deals");
    if report.sale_products.is_empty() {
        ctx.output.info(dashboard::NO_DEALS_MESSAGE);
    } else {
        let widths = [30, 8, 10, 10];
        ctx.output
            .table_row(&["Product", "Savings", "Regular", "Sale"], &widths);
        for item in &report.sale_products {
            let savings = format!("{}%", item.savings);
            let regular = format::currency(item.regular_price);
            let sale = format::currency(item.sale_price);
            ctx.output.table_row(
                &[item.name.as_str(), savings.as_str(), regular.as_str(), sale.as_str()],
                &widths,
            );
        }
    }

    ctx.output.header("Top Rated Products");
    if report.top_rated.is_empty() {
        ctx.output.info("No rated products in this category");
    } else {
        let widths = [40, 8, 8, 10];
        ctx.output
            .table_row(&["Product", "Rating", "Reviews", "Price"], &widths);
        for item in &report.top_rated {
            let rating = format::rating(item.rating);
            let reviews = format::count(u64::from(item.review_count));
            let price = item
                .regular_price
                .map(format::currency)
                .unwrap_or_else(|| "-".to_string());
            ctx.output.table_row(
                &[item.name.as_str(), rating.as_str(), reviews.as_str(), price.as_str()],
                &widths,
            );
        }
    }
}
