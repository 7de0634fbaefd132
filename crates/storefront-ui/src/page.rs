//! Homepage assembly and streaming.

use chrono::{DateTime, Utc};
use edge_core::WorkloadError;
use edge_observability::MetricsCollector;
use edge_streaming::{HeadContent, Shell, StreamingSink};
use futures::Sink;
use storefront_catalog::{CardViewModel, HomepageSections};

use crate::carousel::{Carousel, CarouselConfig, CarouselKind};
use crate::content::{CarouselHeading, HomepageContent};
use crate::sections::{
    render_brands, render_bundles, render_categories, render_countdown, render_hero,
    render_newsletter, render_promotions, render_testimonials,
};

/// Section names in page order.
pub const SECTION_ORDER: [&str; 10] = [
    "hero",
    "promotions",
    "flash-deals",
    "new-arrivals",
    "brands",
    "categories",
    "best-sellers",
    "bundles",
    "testimonials",
    "newsletter",
];

/// One rendered section.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub name: &'static str,
    pub html: String,
    /// A product section that rendered its empty state.
    pub empty: bool,
}

/// The storefront homepage for one request.
#[derive(Debug, Clone)]
pub struct HomePage {
    sections: HomepageSections,
    content: HomepageContent,
    carousel: CarouselConfig,
    now: DateTime<Utc>,
}

impl HomePage {
    pub fn new(
        sections: HomepageSections,
        content: HomepageContent,
        carousel: CarouselConfig,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sections,
            content,
            carousel,
            now,
        }
    }

    pub fn sections(&self) -> &HomepageSections {
        &self.sections
    }

    /// Document skeleton: head, site header and footer, slider scripts.
    pub fn shell(&self) -> Shell {
        let head = HeadContent::new(&self.content.page_title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", &self.content.description)
            .with_stylesheet(SLICK_CSS)
            .with_stylesheet(SLICK_THEME_CSS)
            .with_style(PAGE_STYLES);

        Shell::new(head)
            .with_body_start(SITE_HEADER)
            .with_body_end(SITE_FOOTER)
            .with_script_src(JQUERY_JS)
            .with_script_src(SLICK_JS)
            .with_inline_script(PAGE_SCRIPT)
    }

    /// Render every section, in page order.
    pub fn render_sections(&self) -> Vec<RenderedSection> {
        let content = &self.content;
        let sections = &self.sections;

        let flash = {
            let mut carousel = self.carousel(CarouselKind::FlashDeal, &content.flash_deals, "flash-deals");
            if let Some(deadline) = sections.earliest_deal_end {
                carousel = carousel.with_header_extra(render_countdown(deadline, self.now));
            }
            product_section("flash-deals", &carousel, &sections.flash_deals)
        };
        let new_arrivals = product_section(
            "new-arrivals",
            &self.carousel(CarouselKind::NewArrival, &content.new_arrivals, "new-arrivals"),
            &sections.new_arrivals,
        );
        let best_sellers = product_section(
            "best-sellers",
            &self.carousel(CarouselKind::BestSeller, &content.best_sellers, "best-sellers"),
            &sections.best_sellers,
        );

        vec![
            static_section("hero", render_hero(&content.hero)),
            static_section("promotions", render_promotions(&content.promotions)),
            flash,
            new_arrivals,
            static_section("brands", render_brands(&content.brands)),
            static_section("categories", render_categories(&content.categories)),
            best_sellers,
            static_section("bundles", render_bundles(&content.bundles)),
            static_section("testimonials", render_testimonials(&content.testimonials)),
            static_section("newsletter", render_newsletter(&content.newsletter)),
        ]
    }

    /// Stream the page: shell first, then each section, then the closing
    /// shell. Stops at the first write failure.
    pub async fn stream<S, E>(
        &self,
        sink: &mut StreamingSink<S, E>,
        metrics: &mut MetricsCollector,
    ) -> Result<(), WorkloadError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: std::fmt::Display,
    {
        let shell = self.shell();

        sink.send_shell(&shell.render_opening()).await?;
        metrics.record_shell_sent();

        for section in self.render_sections() {
            metrics.record_section_start(section.name);
            sink.send_section(section.name, &section.html).await?;
            metrics.record_section_sent(section.name, section.html.len(), section.empty);
        }

        sink.send_raw(shell.render_closing().into_bytes()).await?;
        sink.complete().await
    }

    /// The whole document as one string.
    pub fn render_to_string(&self) -> String {
        let shell = self.shell();
        let mut html = shell.render_opening();
        for section in self.render_sections() {
            html.push_str(&section.html);
        }
        html.push_str(&shell.render_closing());
        html
    }

    fn carousel(&self, kind: CarouselKind, heading: &CarouselHeading, section: &str) -> Carousel {
        Carousel::new(kind, &heading.title, &heading.view_all_link)
            .with_config(self.carousel.clone())
            .with_section(section)
    }
}

fn static_section(name: &'static str, html: String) -> RenderedSection {
    RenderedSection {
        name,
        html,
        empty: false,
    }
}

fn product_section(name: &'static str, carousel: &Carousel, cards: &[CardViewModel]) -> RenderedSection {
    RenderedSection {
        name,
        html: carousel.render(cards),
        empty: cards.is_empty(),
    }
}

const SLICK_CSS: &str = "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick.css";
const SLICK_THEME_CSS: &str = "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick-theme.css";
const JQUERY_JS: &str = "https://cdn.jsdelivr.net/npm/jquery@3.7.1/dist/jquery.min.js";
const SLICK_JS: &str = "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick.min.js";

const SITE_HEADER: &str = r#"<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">FixIt Mobile</a>
        <div class="nav-links">
            <a href="/phones">Phones</a>
            <a href="/products/Accessories">Accessories</a>
            <a href="/repair">Repair</a>
            <a href="/sale">Deals</a>
        </div>
        <a href="/cart" class="nav-cart">Cart</a>
    </nav>
</header>
<main class="main-content">
"#;

const SITE_FOOTER: &str = r#"
</main>
<footer class="site-footer">
    <p>&copy; FixIt Mobile. Repairs, phones and accessories.</p>
</footer>
"#;

/// Initialises each slider once and keeps the deal clock ticking.
const PAGE_SCRIPT: &str = r#"
(function () {
    if (window.jQuery && jQuery.fn.slick) {
        jQuery('.product-slider').not('.slick-initialized').each(function () {
            jQuery(this).slick(jQuery(this).data('slick') || {});
        });
    }

    var timer = document.querySelector('.countdown-timer[data-deadline]');
    if (timer) {
        var deadline = Date.parse(timer.getAttribute('data-deadline'));
        var value = timer.querySelector('.timer-value');
        var pad = function (n) { return String(n).padStart(2, '0'); };
        var tick = function () {
            var left = Math.max(0, Math.floor((deadline - Date.now()) / 1000));
            value.textContent = pad(Math.floor(left / 3600)) + ':' + pad(Math.floor(left % 3600 / 60)) + ':' + pad(left % 60);
            if (left > 0) { setTimeout(tick, 1000); }
        };
        tick();
    }

    var form = document.getElementById('newsletter-form');
    if (form) {
        form.addEventListener('submit', function (e) {
            e.preventDefault();
            fetch(form.action, { method: 'POST', body: new FormData(form) })
                .then(function (res) {
                    if (res.ok) {
                        form.hidden = true;
                        document.querySelector('.newsletter-success').hidden = false;
                    }
                });
        });
    }
})();
"#;

const PAGE_STYLES: &str = r#"
:root {
    --primary: #0d6efd;
    --primary-hover: #0b5ed7;
    --accent: #dc3545;
    --text: #212529;
    --text-muted: #6c757d;
    --bg-alt: #f8f9fa;
    --border: #dee2e6;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--text);
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

.site-header { border-bottom: 1px solid var(--border); background: #fff; position: sticky; top: 0; z-index: 10; }
.nav-container { max-width: 1200px; margin: 0 auto; padding: 1rem 2rem; display: flex; align-items: center; justify-content: space-between; }
.logo { font-weight: 700; font-size: 1.4rem; color: var(--primary); }
.nav-links { display: flex; gap: 1.5rem; }

.btn { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 6px; font-weight: 600; border: 2px solid var(--primary); cursor: pointer; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-primary:hover { background: var(--primary-hover); }
.btn-outline { background: transparent; color: var(--primary); }
.btn-sm { padding: 0.4rem 0.9rem; font-size: 0.875rem; }

.hero-section { display: flex; align-items: center; justify-content: space-between; max-width: 1200px; margin: 0 auto; padding: 3rem 2rem; gap: 2rem; }
.hero-title { font-size: 3rem; font-weight: 800; line-height: 1.1; margin-bottom: 1.5rem; }
.hero-buttons { display: flex; gap: 1rem; }
.hero-image img { max-width: 100%; height: auto; object-fit: contain; }

.promotions-banner { background: var(--bg-alt); padding: 2rem; text-align: center; }
.promo-slide { display: none; }
.promo-slide.active { display: block; }
.promo-title { font-size: 2rem; font-weight: 800; }
.promo-subtitle { color: var(--text-muted); margin-bottom: 1rem; }
.promo-indicators { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
.indicator { width: 10px; height: 10px; border-radius: 50%; background: var(--border); }
.indicator.active { background: var(--primary); }

.product-carousel-section, .bundle-deals-section, .testimonials-section { max-width: 1200px; margin: 0 auto; padding: 2.5rem 2rem; }
.section-header { display: flex; align-items: center; justify-content: space-between; gap: 1rem; margin-bottom: 1.5rem; }
.section-title { font-size: 1.75rem; font-weight: 700; }
.view-all-link { color: var(--primary); font-weight: 600; }
.countdown-timer { display: flex; gap: 0.5rem; color: var(--accent); font-weight: 700; margin-left: auto; }

.carousel-slide { padding: 0 0.5rem; }
.carousel-card, .bundle-card { position: relative; display: block; border: 1px solid var(--border); border-radius: 10px; padding: 1rem; background: #fff; }
.card-image { display: flex; justify-content: center; }
.card-image img { max-width: 100%; height: auto; object-fit: contain; }
.product-name, .bundle-name { font-size: 1rem; margin: 0.75rem 0 0.25rem; }
.price, .sale-price, .bundle-price { font-weight: 700; }
.original-price { color: var(--text-muted); text-decoration: line-through; margin-right: 0.5rem; }
.sale-price { color: var(--accent); }
.timer-container { color: var(--accent); font-size: 0.875rem; margin: 0.25rem 0; }
.stars { color: #f5a623; letter-spacing: 1px; }
.review-count { color: var(--text-muted); font-size: 0.875rem; margin-left: 0.25rem; }
.carousel-card .btn { margin-top: 0.75rem; }

.discount-badge, .new-badge, .bestseller-badge, .savings-badge { position: absolute; top: 0.75rem; left: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 4px; color: #fff; font-size: 0.75rem; font-weight: 700; }
.discount-badge, .savings-badge { background: var(--accent); }
.new-badge { background: #198754; }
.bestseller-badge { background: #fd7e14; }

.no-products-message { padding: 2rem; text-align: center; color: var(--text-muted); background: var(--bg-alt); border-radius: 10px; }

.products-section, .categories-section { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.cards-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.category-cards-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.product-card, .category-card { display: block; border-radius: 10px; padding: 1.5rem; background: var(--bg-alt); }
.view-all-btn { color: var(--primary); font-weight: 600; }

.bundles-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; }
.bundle-items { margin: 0.5rem 0 0.75rem 1.25rem; color: var(--text-muted); }

.testimonials-slider { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
.testimonial-card { padding: 1.5rem; border-radius: 10px; background: var(--bg-alt); }
.testimonial-rating { color: #f5a623; margin-bottom: 0.5rem; }
.testimonial-text { font-style: italic; margin-bottom: 1rem; }
.testimonial-author { display: flex; justify-content: space-between; color: var(--text-muted); font-size: 0.875rem; }
.author-name { font-weight: 600; color: var(--text); }

.newsletter-section { background: var(--primary); color: #fff; padding: 3rem 2rem; text-align: center; }
.newsletter-title { font-size: 1.75rem; }
.newsletter-text { opacity: 0.9; margin-bottom: 1.25rem; }
.newsletter-form { display: flex; justify-content: center; gap: 0.5rem; }
.newsletter-input { padding: 0.75rem 1rem; border-radius: 6px; border: none; min-width: 280px; }
.newsletter-section .btn-primary { background: #fff; color: var(--primary); border-color: #fff; }

.site-footer { padding: 2rem; text-align: center; color: var(--text-muted); border-top: 1px solid var(--border); }

@media (max-width: 992px) {
    .hero-section { flex-direction: column; text-align: center; }
    .hero-buttons { justify-content: center; }
    .cards-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 576px) {
    .nav-links { display: none; }
    .hero-title { font-size: 2.25rem; }
    .cards-grid, .category-cards-grid { grid-template-columns: 1fr; }
    .newsletter-form { flex-direction: column; }
    .newsletter-input { min-width: 0; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::EMPTY_MESSAGE;
    use edge_core::{RequestId, TimingContext};
    use futures::executor::block_on;
    use storefront_catalog::countdown::parse_deadline;
    use storefront_catalog::{HomepagePayload, MapperConfig, EMPTY_HOMEPAGE};

    fn now() -> DateTime<Utc> {
        parse_deadline("2026-10-16T12:00:00Z").unwrap()
    }

    fn page_for(payload: &HomepagePayload) -> HomePage {
        let sections = HomepageSections::from_payload(payload, &MapperConfig::default(), now());
        HomePage::new(sections, HomepageContent::default(), CarouselConfig::default(), now())
    }

    fn sample() -> HomepagePayload {
        HomepagePayload::from_slice(
            br#"{
                "flash_deals": [{"id": 1, "slug": "iphone-15-pro", "name": "iPhone 15 Pro",
                                 "original_price": "999.00", "discount_percentage": "10.00",
                                 "end_date": "2026-10-16T17:23:47Z"}],
                "new_arrivals": {"phones": [{"id": 2, "slug": "pixel-8", "name": "Pixel 8", "price": "699.00"}],
                                 "accessories": [{"id": 3, "slug": "buds", "name": "Galaxy Buds", "price": "149.00"}]},
                "best_sellers": {"phones": [], "accessories": [{"id": 4, "slug": "stand", "name": "Charging Stand",
                                 "price": "29.99", "rating": 4.9, "review_count": 412}]}
            }"#,
        )
        .unwrap()
    }

    fn stream(page: &HomePage) -> (Vec<u8>, Vec<String>, edge_observability::RequestMetrics) {
        let mut sink = StreamingSink::new(Vec::<Vec<u8>>::new(), TimingContext::new());
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-test"));
        block_on(page.stream(&mut sink, &mut metrics)).unwrap();
        let sent = sink.sections_sent().to_vec();
        let body = sink.into_inner().concat();
        (body, sent, metrics.finalize(Some(200)))
    }

    #[test]
    fn test_sections_in_page_order() {
        let names: Vec<&str> = page_for(&sample()).render_sections().iter().map(|s| s.name).collect();
        assert_eq!(names, SECTION_ORDER);
    }

    #[test]
    fn test_page_with_catalog_data() {
        let html = page_for(&sample()).render_to_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains(r#"href="/product/phone/iphone-15-pro""#));
        assert!(html.contains(r#"<span class="sale-price">$899.10</span>"#));
        assert!(html.contains(r#"<span class="timer-value">05:23:47</span>"#));
        assert!(html.contains(r#"href="/product/accessory/buds""#));
        assert!(html.contains(r#"<span class="review-count">(412)</span>"#));
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_failed_catalog_still_renders_full_page() {
        let page = page_for(&EMPTY_HOMEPAGE);
        let html = page.render_to_string();

        assert_eq!(html.matches(EMPTY_MESSAGE).count(), 3);
        assert!(!html.contains(r#"class="product-slider""#));
        assert!(!html.contains(r#"class="countdown-timer" data-deadline"#));
        assert!(html.contains("REPAIR IS OUR SPECIALTY"));
        assert!(html.contains("Save with Bundles"));
        assert!(html.contains("Get 10% Off Your First Order"));

        let empty: Vec<&str> = page
            .render_sections()
            .iter()
            .filter(|s| s.empty)
            .map(|s| s.name)
            .collect();
        assert_eq!(empty, ["flash-deals", "new-arrivals", "best-sellers"]);
    }

    #[test]
    fn test_stream_matches_string_render() {
        let page = page_for(&sample());
        let (body, sent, metrics) = stream(&page);

        assert_eq!(String::from_utf8(body).unwrap(), page.render_to_string());
        assert_eq!(sent, SECTION_ORDER);
        assert_eq!(metrics.sections.len(), SECTION_ORDER.len());
        assert!(metrics.time_to_shell_us.is_some());
        assert!(metrics.sections.iter().all(|s| !s.used_fallback));
    }

    #[test]
    fn test_stream_marks_empty_sections() {
        let (_, _, metrics) = stream(&page_for(&EMPTY_HOMEPAGE));
        let fallback: Vec<&str> = metrics
            .sections
            .iter()
            .filter(|s| s.used_fallback)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(fallback, ["flash-deals", "new-arrivals", "best-sellers"]);
    }

    #[test]
    fn test_shell_loads_slider() {
        let shell = HomePage::new(
            HomepageSections::empty(),
            HomepageContent::default(),
            CarouselConfig::default(),
            now(),
        )
        .shell();
        let opening = shell.render_opening();
        assert!(opening.contains("Mobile Repair &amp; Accessories"));
        assert!(opening.contains("slick.css"));
        let closing = shell.render_closing();
        assert!(closing.contains("slick.min.js"));
        assert!(closing.contains(".not('.slick-initialized')"));
    }
}
