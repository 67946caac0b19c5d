//! Category filter menu.

use dash_analytics::FacetValue;

use crate::escape::html_escape;

/// Render the category menu.
///
/// Each entry is a toggle: pressing the active category clears the filter.
pub fn render_filter_menu(menu: &[FacetValue], selected: Option<&str>) -> String {
    let buttons: String = menu
        .iter()
        .map(|v| {
            let active = selected == Some(v.full_label.as_str());
            format!(
                r#"<button class="menu-item{active_class}" data-category="{category}" aria-pressed="{active}">
            <span class="menu-label">{category}</span>
            <span class="menu-count">{count}</span>
        </button>"#,
                active_class = if active { " menu-item--active" } else { "" },
                category = html_escape(&v.full_label),
                count = v.count,
            )
        })
        .collect();

    format!(
        r#"<nav class="filter-menu" data-section="filter-menu">
    <h2>Filter by Category</h2>
    <div class="menu-items">
        {buttons}
    </div>
</nav>"#
    )
}
