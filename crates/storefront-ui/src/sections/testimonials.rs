//! Testimonials section.

use crate::carousel::star_glyphs;
use crate::content::TestimonialsContent;
use crate::escape::html_escape;

/// Render the customer testimonials.
pub fn render_testimonials(content: &TestimonialsContent) -> String {
    let cards: String = content
        .testimonials
        .iter()
        .map(|t| {
            format!(
                r#"<article class="testimonial-card">
            <div class="testimonial-rating" aria-label="{} out of 5">{}</div>
            <p class="testimonial-text">"{}"</p>
            <div class="testimonial-author">
                <span class="author-name">{}</span>
                <span class="testimonial-date">{}</span>
            </div>
        </article>
        "#,
                t.rating.min(5),
                star_glyphs(f32::from(t.rating)),
                html_escape(&t.comment),
                html_escape(&t.name),
                html_escape(&t.date)
            )
        })
        .collect();

    format!(
        r#"<section class="testimonials-section" data-section="testimonials">
    <h2 class="section-title">{}</h2>
    <div class="testimonials-slider">
        {}
    </div>
</section>"#,
        html_escape(&content.section_title),
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_star_ratings() {
        let html = render_testimonials(&TestimonialsContent::default());
        assert_eq!(html.matches("★★★★★").count(), 2);
        assert!(html.contains("★★★★☆"));
        assert!(html.contains("Michael T."));
        assert!(html.contains("What Our Customers Say"));
    }
}
