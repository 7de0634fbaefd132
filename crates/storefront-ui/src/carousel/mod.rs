//! Product carousel component.
//!
//! - `CarouselConfig` - slider settings and the responsive breakpoint table
//! - `CarouselKind` / `CardTemplate` - one card template per carousel kind
//! - `ResizeEvents` / `MountedCarousel` - viewport tracking with scoped teardown

mod config;
mod template;
mod viewport;

pub use config::*;
pub use template::*;
pub use viewport::*;

use storefront_catalog::CardViewModel;

use crate::escape::html_escape;

/// Shown in place of the slider when a section has no cards.
pub const EMPTY_MESSAGE: &str = "No products available at the moment. Check back soon!";

/// A titled, linkable carousel section.
#[derive(Debug, Clone)]
pub struct Carousel {
    kind: CarouselKind,
    title: String,
    view_all_link: String,
    config: CarouselConfig,
    section: Option<String>,
    header_extra: Option<String>,
}

impl Carousel {
    pub fn new(kind: CarouselKind, title: impl Into<String>, view_all_link: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            view_all_link: view_all_link.into(),
            config: CarouselConfig::default(),
            section: None,
            header_extra: None,
        }
    }

    pub fn with_config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Name emitted as `data-section`.
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        self.section = Some(name.into());
        self
    }

    /// Pre-rendered markup placed in the header after the title.
    pub fn with_header_extra(mut self, html: impl Into<String>) -> Self {
        self.header_extra = Some(html.into());
        self
    }

    pub fn kind(&self) -> CarouselKind {
        self.kind
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Render the section. An empty card list renders the empty-state
    /// message and no slider element.
    pub fn render(&self, cards: &[CardViewModel]) -> String {
        let body = if cards.is_empty() {
            format!(
                r#"<div class="no-products-message">
            <p>{}</p>
        </div>"#,
                EMPTY_MESSAGE
            )
        } else {
            let slides: String = cards
                .iter()
                .map(|card| format!("<div class=\"carousel-slide\">{}</div>\n", self.kind.render_card(card)))
                .collect();
            format!(
                r#"<div class="product-slider" data-slick="{}">
{}</div>"#,
                html_escape(&self.config.to_json()),
                slides
            )
        };

        let section_attr = self
            .section
            .as_ref()
            .map(|name| format!(r#" data-section="{}""#, html_escape(name)))
            .unwrap_or_default();

        format!(
            r#"<section class="product-carousel-section {}-carousel"{}>
    <div class="section-header">
        <h2 class="section-title">{}</h2>
        {}<a href="{}" class="view-all-link">View All</a>
    </div>
    <div class="carousel-container">
        {}
    </div>
</section>"#,
            self.kind,
            section_attr,
            html_escape(&self.title),
            self.header_extra.as_deref().unwrap_or_default(),
            html_escape(&self.view_all_link),
            body
        )
    }

    /// Attach to a viewport for responsive slide counts.
    pub fn mount(&self, events: &ResizeEvents) -> MountedCarousel {
        MountedCarousel::attach(self.config.clone(), events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{Price, ProductKind};

    fn card(n: u32) -> CardViewModel {
        CardViewModel {
            id: format!("phone-{n}"),
            name: format!("Phone {n}"),
            original_price: Price::from_decimal(499.0),
            sale_price: None,
            image: "/images/placeholder.png".to_string(),
            discount: "Sale".to_string(),
            time_left: "5h 23m".to_string(),
            slug: format!("phone-{n}"),
            product_type: ProductKind::Phone,
            rating: 4.0,
            review_count: 10,
        }
    }

    #[test]
    fn test_empty_renders_message_without_slider() {
        let html = Carousel::new(CarouselKind::NewArrival, "Just Arrived", "/new-arrivals").render(&[]);
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains("product-slider"));
        assert!(!html.contains("data-slick"));
        assert!(html.contains(r#"<h2 class="section-title">Just Arrived</h2>"#));
        assert!(html.contains(r#"<a href="/new-arrivals" class="view-all-link">View All</a>"#));
    }

    #[test]
    fn test_renders_one_slide_per_card() {
        let cards = [card(1), card(2), card(3)];
        let html = Carousel::new(CarouselKind::BestSeller, "Customer Favorites", "/best-sellers")
            .with_section("best-sellers")
            .render(&cards);
        assert_eq!(html.matches("class=\"carousel-slide\"").count(), 3);
        assert!(html.contains("product-carousel-section best-seller-carousel"));
        assert!(html.contains(r#"data-section="best-sellers""#));
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_slider_carries_settings() {
        let html = Carousel::new(CarouselKind::Plain, "Phones", "/phones")
            .with_config(CarouselConfig::for_slides(2).with_autoplay(false, 3000))
            .render(&[card(1)]);
        assert!(html.contains("data-slick=\"{&quot;dots&quot;:true"));
        assert!(html.contains("&quot;slidesToShow&quot;:2"));
        assert!(html.contains("&quot;autoplay&quot;:false"));
    }

    #[test]
    fn test_header_extra() {
        let html = Carousel::new(CarouselKind::FlashDeal, "Flash Deals", "/sale")
            .with_header_extra(r#"<div class="countdown-timer"></div>"#)
            .render(&[]);
        assert!(html.contains(r#"<div class="countdown-timer"></div><a href="/sale""#));
    }

    #[test]
    fn test_mount_tracks_viewport() {
        let events = ResizeEvents::new(1500);
        let carousel = Carousel::new(CarouselKind::Plain, "Phones", "/phones");
        let mounted = carousel.mount(&events);
        assert_eq!(mounted.visible_slides(), 4);
        events.resize(800);
        assert_eq!(mounted.visible_slides(), 2);
        drop(mounted);
        assert_eq!(events.listener_count(), 0);
    }
}
