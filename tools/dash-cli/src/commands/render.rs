//! Render command.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context as _, Result};
use dash_analytics::category_menu;
use dashboard::{render_page, DashboardView};

use super::RenderArgs;
use crate::context::Context;

/// Where the page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    File(PathBuf),
}

/// Resolve the output target from the flag and the configured default.
pub fn target(flag: Option<&str>, ctx: &Context) -> Target {
    match flag.unwrap_or(ctx.config.render.output.as_str()) {
        "-" => Target::Stdout,
        path => Target::File(ctx.resolve_path(path)),
    }
}

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let (catalog, _) = ctx.load_catalog()?;
    let menu = category_menu(&catalog);
    let report = ctx.compute(&catalog, args.category.as_deref());

    let view = DashboardView::new(&ctx.config.render.title, catalog.len(), &menu, &report);
    let started = Instant::now();
    let html = render_page(&view);
    let render_time = started.elapsed();

    match target(args.output.as_deref(), ctx) {
        Target::Stdout => print!("{}", html),
        Target::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write dashboard: {}", path.display()))?;

            ctx.logger
                .info_builder("dashboard rendered")
                .duration_us("render_us", render_time)
                .field("filter", report.filter.as_deref().unwrap_or("all"))
                .field("path", path.display().to_string())
                .field_u64("bytes", html.len() as u64)
                .emit();

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": html.len(),
                    "filter": report.filter,
                    "products": report.kpis.total,
                }));
            } else {
                ctx.output.success(&format!(
                    "Wrote {} ({} products shown)",
                    path.display(),
                    report.kpis.total
                ));
            }
        }
    }

    Ok(())
}
