//! Newsletter signup section.

use crate::content::NewsletterContent;
use crate::escape::html_escape;

/// Render the newsletter signup form.
pub fn render_newsletter(content: &NewsletterContent) -> String {
    format!(
        r#"<section class="newsletter-section" data-section="newsletter">
    <div class="newsletter-content">
        <h2 class="newsletter-title">{}</h2>
        <p class="newsletter-text">{}</p>
        <form class="newsletter-form" action="{}" method="POST" id="newsletter-form">
            <input type="email" name="email" placeholder="{}" class="newsletter-input" aria-label="Email address" required>
            <button type="submit" class="btn btn-primary">{}</button>
        </form>
        <div class="newsletter-success" hidden>
            <p>Thanks for subscribing! Check your inbox for your discount code.</p>
        </div>
    </div>
</section>"#,
        html_escape(&content.title),
        html_escape(&content.text),
        html_escape(&content.action),
        html_escape(&content.placeholder),
        html_escape(&content.button_text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_posts_to_action() {
        let html = render_newsletter(&NewsletterContent::default());
        assert!(html.contains("Get 10% Off Your First Order"));
        assert!(html.contains(r#"action="/api/newsletter" method="POST""#));
        assert!(html.contains(r#"type="email""#));
    }
}
