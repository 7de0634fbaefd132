//! Hero banner section.

use crate::content::HeroContent;
use crate::escape::html_escape;

/// Render the hero banner.
pub fn render_hero(content: &HeroContent) -> String {
    format!(
        r#"<section class="hero-section" data-section="hero">
    <div class="hero-content">
        <div class="hero-text">
            <h1 class="hero-title">{}</h1>
            <div class="hero-buttons">
                <a href="{}" class="btn btn-primary">{}</a>
                <a href="{}" class="btn btn-outline">{}</a>
            </div>
        </div>
    </div>
    <div class="hero-image">
        <img src="{}" alt="{}" width="500" height="670" fetchpriority="high">
    </div>
</section>"#,
        html_escape(&content.title),
        html_escape(&content.shop_url),
        html_escape(&content.shop_label),
        html_escape(&content.repair_url),
        html_escape(&content.repair_label),
        html_escape(&content.image),
        html_escape(&content.image_alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_links() {
        let html = render_hero(&HeroContent::default());
        assert!(html.contains("REPAIR IS OUR SPECIALTY"));
        assert!(html.contains(r#"<a href="/products/Accessories" class="btn btn-primary">Shop</a>"#));
        assert!(html.contains(r#"<a href="/repair" class="btn btn-outline">Repair</a>"#));
    }
}
