//! Promotions banner.

use crate::content::Promotion;
use crate::escape::html_escape;

/// Render the promotions banner. The first slide starts active.
pub fn render_promotions(promotions: &[Promotion]) -> String {
    let active = |index: usize| if index == 0 { " active" } else { "" };

    let slides: String = promotions
        .iter()
        .enumerate()
        .map(|(index, promo)| {
            format!(
                r#"<div class="promo-slide{}">
            <div class="promo-content">
                <h2 class="promo-title">{}</h2>
                <p class="promo-subtitle">{}</p>
                <a href="{}" class="btn btn-primary">{}</a>
            </div>
        </div>
        "#,
                active(index),
                html_escape(&promo.title),
                html_escape(&promo.subtitle),
                html_escape(&promo.link),
                html_escape(&promo.button_text)
            )
        })
        .collect();

    let indicators: String = (0..promotions.len())
        .map(|index| format!(r#"<span class="indicator{}"></span>"#, active(index)))
        .collect();

    format!(
        r#"<section class="promotions-banner" data-section="promotions">
    <div class="promo-slider">
        {}<div class="promo-indicators">{}</div>
    </div>
</section>"#,
        slides, indicators
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HomepageContent;

    #[test]
    fn test_first_slide_is_active() {
        let html = render_promotions(&HomepageContent::default().promotions);
        assert_eq!(html.matches("promo-slide active").count(), 1);
        assert_eq!(html.matches("class=\"promo-slide\"").count(), 2);
        assert_eq!(html.matches("<span class=\"indicator").count(), 3);
        assert!(html.contains(r#"href="/trade-in""#));
        assert!(html.contains("Up to 30% off select accessories"));
    }

    #[test]
    fn test_no_promotions() {
        let html = render_promotions(&[]);
        assert!(!html.contains("promo-slide"));
        assert!(html.contains("promo-indicators"));
    }
}
