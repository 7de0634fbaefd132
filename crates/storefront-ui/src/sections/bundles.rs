//! Bundle offers section.

use storefront_catalog::Price;

use crate::content::{Bundle, BundlesContent};
use crate::escape::html_escape;

/// Render the bundle offers.
pub fn render_bundles(content: &BundlesContent) -> String {
    let cards: String = content.bundles.iter().map(render_bundle).collect();

    format!(
        r#"<section class="bundle-deals-section" data-section="bundles">
    <div class="section-header">
        <h2 class="section-title">{}</h2>
        <a href="{}" class="view-all-link">View All</a>
    </div>
    <div class="bundles-grid">
        {}
    </div>
</section>"#,
        html_escape(&content.section_title),
        html_escape(&content.view_all_link),
        cards
    )
}

fn render_bundle(bundle: &Bundle) -> String {
    let original = Price::from_decimal(bundle.original_price);
    let price = Price::from_decimal(bundle.bundle_price);
    let items: String = bundle
        .items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect();

    format!(
        r#"<a href="/bundle/{}" class="bundle-card">
            <div class="savings-badge">Save {}</div>
            <div class="card-image">
                <img src="{}" alt="{}" width="200" height="200" loading="lazy">
            </div>
            <div class="card-content">
                <h3 class="bundle-name">{}</h3>
                <ul class="bundle-items">{}</ul>
                <div class="price-container">
                    <span class="original-price">{}</span>
                    <span class="bundle-price">{}</span>
                </div>
                <button type="button" class="btn btn-primary">Add Bundle to Cart</button>
            </div>
        </a>
        "#,
        bundle.id,
        original.savings_to(price),
        html_escape(&bundle.image),
        html_escape(&bundle.name),
        html_escape(&bundle.name),
        items,
        original,
        price
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_badges() {
        let html = render_bundles(&BundlesContent::default());
        // 1156 - 999 and 1356 - 1199
        assert_eq!(html.matches(r#"<div class="savings-badge">Save $157.00</div>"#).count(), 2);
        assert!(html.contains(r#"<a href="/bundle/1" class="bundle-card">"#));
        assert!(html.contains(r#"<a href="/bundle/2" class="bundle-card">"#));
        assert!(html.contains("<li>MagSafe Charger</li>"));
        assert!(html.contains(r#"<span class="bundle-price">$1199.00</span>"#));
        assert!(html.contains(r#"<a href="/bundles" class="view-all-link">"#));
    }

    #[test]
    fn test_bundle_priced_above_items_saves_nothing() {
        let content = BundlesContent {
            bundles: vec![Bundle {
                id: 9,
                name: "Odd Pack".to_string(),
                items: vec![],
                original_price: 10.0,
                bundle_price: 12.5,
                image: "/images/placeholder.png".to_string(),
            }],
            ..BundlesContent::default()
        };
        assert!(render_bundles(&content).contains("Save $0.00"));
    }
}
