//! Header section - title, catalog size and the active filter.

use crate::escape::html_escape;

/// Render the dashboard header.
///
/// When a category is selected the header carries a "Clear Filter" control
/// naming it.
pub fn render_header(title: &str, catalog_size: usize, selected: Option<&str>) -> String {
    let product_text = if catalog_size == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", crate::format::count(catalog_size as u64))
    };

    let clear_filter = match selected {
        Some(category) => format!(
            r#"<button class="clear-filter" data-action="clear-filter" data-category="{category}">Clear Filter: {category}</button>"#,
            category = html_escape(category)
        ),
        None => String::new(),
    };

    format!(
        r#"<header class="dashboard-header" data-section="header">
    <div class="dashboard-title">
        <h1>{title}</h1>
        <p class="dashboard-subtitle">Product catalog analytics &middot; {product_text}</p>
    </div>
    {clear_filter}
    <div class="accent-bar"></div>
</header>"#,
        title = html_escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_unfiltered() {
        let html = render_header("Sonance Best Buy Dashboard", 30, None);
        assert!(html.contains(r#"data-section="header""#));
        assert!(html.contains("<h1>Sonance Best Buy Dashboard</h1>"));
        assert!(html.contains("30 products"));
        assert!(!html.contains("Clear Filter"));
    }

    #[test]
    fn test_header_with_filter() {
        let html = render_header("Dashboard", 1, Some("Subwoofers"));
        assert!(html.contains("1 product"));
        assert!(html.contains("Clear Filter: Subwoofers"));
    }

    #[test]
    fn test_header_escapes() {
        let html = render_header("<Deals>", 2, Some("A & B"));
        assert!(html.contains("&lt;Deals&gt;"));
        assert!(html.contains("Clear Filter: A &amp; B"));
    }
}
