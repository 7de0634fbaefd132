//! Brand and category tiles.

use crate::content::LinkCard;
use crate::escape::html_escape;

/// Render the phone brand tiles.
pub fn render_brands(cards: &[LinkCard]) -> String {
    render_tiles("products-section", "cards-grid", "product-card", "brands", "product", cards)
}

/// Render the category tiles.
pub fn render_categories(cards: &[LinkCard]) -> String {
    render_tiles(
        "categories-section",
        "category-cards-grid",
        "category-card",
        "categories",
        "category",
        cards,
    )
}

fn render_tiles(
    section_class: &str,
    grid_class: &str,
    card_class: &str,
    section: &str,
    alt_suffix: &str,
    cards: &[LinkCard],
) -> String {
    let tiles: String = cards
        .iter()
        .map(|card| {
            format!(
                r#"<a href="{}" class="{}">
            <div class="card-content">
                <h2>{}</h2>
                <span class="view-all-btn">View All</span>
                <div class="card-image">
                    <img src="{}" alt="{} {}" width="243" height="243" loading="lazy">
                </div>
            </div>
        </a>
        "#,
                html_escape(&card.link),
                card_class,
                html_escape(&card.name),
                html_escape(&card.image),
                html_escape(&card.name),
                alt_suffix
            )
        })
        .collect();

    format!(
        r#"<section class="{}" data-section="{}">
    <div class="{}">
        {}
    </div>
</section>"#,
        section_class, section, grid_class, tiles
    )
}
