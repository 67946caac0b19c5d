//! Category menu command.

use anyhow::Result;
use dash_analytics::category_menu;

use crate::context::Context;

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let (catalog, description) = ctx.load_catalog()?;
    let menu = category_menu(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&menu);
        return Ok(());
    }

    ctx.output
        .header(&format!("Categories in {} ({} products)", description, catalog.len()));

    if menu.is_empty() {
        ctx.output.info("The catalog is empty.");
        return Ok(());
    }

    let label_width = menu
        .iter()
        .map(|v| v.full_label.chars().count())
        .max()
        .unwrap_or(0);
    let max = menu.first().map_or(0, |v| v.count);
    for value in &menu {
        ctx.output
            .bar_row(&value.full_label, value.count, max, label_width);
    }

    Ok(())
}
