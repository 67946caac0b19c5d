//! Top rated products table.

use dash_analytics::RatedItem;

use crate::escape::html_escape;
use crate::format;

/// Render the top rated table.
pub fn render_top_rated(items: &[RatedItem]) -> String {
    let rows: String = items.iter().map(render_row).collect();

    let body = if items.is_empty() {
        r#"<tr><td colspan="4" class="empty-state">No rated products in this category</td></tr>"#
            .to_string()
    } else {
        rows
    };

    format!(
        r#"<section class="table-card" data-section="top-rated">
    <h2>Top Rated Products</h2>
    <table class="top-rated">
        <thead>
            <tr><th>Product</th><th class="num">Rating</th><th class="num">Reviews</th><th class="num">Price</th></tr>
        </thead>
        <tbody>
            {body}
        </tbody>
    </table>
</section>"#
    )
}

fn render_row(item: &RatedItem) -> String {
    let price = item
        .regular_price
        .map(format::currency)
        .unwrap_or_else(|| "&ndash;".to_string());

    format!(
        r#"<tr data-sku="{sku}">
                <td class="product-cell" title="{full_name}"><a href="{url}" target="_blank" rel="noopener noreferrer">{name}</a></td>
                <td class="num rating">{rating}</td>
                <td class="num muted">{reviews}</td>
                <td class="num">{price}</td>
            </tr>"#,
        sku = item.sku,
        full_name = html_escape(&item.full_name),
        url = html_escape(&item.url),
        name = html_escape(&item.name),
        rating = format::rating(item.rating),
        reviews = format::count(u64::from(item.review_count)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sku: u64, price: Option<f64>) -> RatedItem {
        RatedItem {
            sku,
            name: "Landscape Series - Black".to_string(),
            full_name: "Sonance - Landscape Series - Black".to_string(),
            rating: 4.75,
            review_count: 1532,
            regular_price: price,
            url: format!("https://www.bestbuy.com/site/{sku}.p?skuId={sku}"),
        }
    }

    #[test]
    fn test_row_contents() {
        let html = render_top_rated(&[item(6412001, Some(1299.0))]);
        assert!(html.contains(r#"data-section="top-rated""#));
        assert!(html.contains(r#"title="Sonance - Landscape Series - Black""#));
        assert!(html.contains(r#"href="https://www.bestbuy.com/site/6412001.p?skuId=6412001""#));
        assert!(html.contains("4.8 ★"));
        assert!(html.contains("1,532"));
        assert!(html.contains("$1,299"));
    }

    #[test]
    fn test_missing_price() {
        let html = render_top_rated(&[item(1, None)]);
        assert!(html.contains(r#"<td class="num">&ndash;</td>"#));
    }

    #[test]
    fn test_empty_table() {
        let html = render_top_rated(&[]);
        assert!(html.contains("No rated products in this category"));
    }
}
