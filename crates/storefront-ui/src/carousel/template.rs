//! Card templates, one per carousel kind.

use std::fmt;
use std::str::FromStr;

use storefront_catalog::CardViewModel;

use crate::error::CarouselError;
use crate::escape::html_escape;

/// Which card template a carousel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CarouselKind {
    FlashDeal,
    NewArrival,
    BestSeller,
    #[default]
    Plain,
}

impl CarouselKind {
    /// Tag used in CSS class names (`flash-deal-carousel`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlashDeal => "flash-deal",
            Self::NewArrival => "new-arrival",
            Self::BestSeller => "best-seller",
            Self::Plain => "default",
        }
    }

    /// Render one card with this kind's template.
    pub fn render_card(&self, card: &CardViewModel) -> String {
        match self {
            Self::FlashDeal => FlashDealCard.render(card),
            Self::NewArrival => NewArrivalCard.render(card),
            Self::BestSeller => BestSellerCard.render(card),
            Self::Plain => PlainCard.render(card),
        }
    }
}

impl fmt::Display for CarouselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarouselKind {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "flash-deal" => Ok(Self::FlashDeal),
            "new-arrival" => Ok(Self::NewArrival),
            "best-seller" => Ok(Self::BestSeller),
            "default" | "" => Ok(Self::Plain),
            other => Err(CarouselError::UnknownKind(other.to_string())),
        }
    }
}

/// Markup for one product card.
///
/// Implementors fill in the parts that differ; `render` assembles the
/// link wrapper, image, name and cart button shared by every card.
pub trait CardTemplate {
    /// Classes on the card's anchor element.
    fn card_class(&self) -> &'static str;

    /// Badge shown over the image.
    fn badge(&self, _card: &CardViewModel) -> Option<String> {
        None
    }

    /// Price block.
    fn price(&self, card: &CardViewModel) -> String {
        format!(r#"<div class="price">{}</div>"#, card.original_price)
    }

    /// Anything between the price and the cart button.
    fn extra(&self, _card: &CardViewModel) -> String {
        String::new()
    }

    fn render(&self, card: &CardViewModel) -> String {
        format!(
            r#"<a href="{}" class="{}" data-product-id="{}">
    {}<div class="card-image">
        <img src="{}" alt="{}" width="200" height="200" loading="lazy">
    </div>
    <div class="card-content">
        <h3 class="product-name">{}</h3>
        {}
        {}<button type="button" class="btn btn-primary btn-sm">Add to Cart</button>
    </div>
</a>"#,
            html_escape(&card.detail_href()),
            self.card_class(),
            html_escape(&card.id),
            self.badge(card).unwrap_or_default(),
            html_escape(&card.image),
            html_escape(&card.name),
            html_escape(&card.name),
            self.price(card),
            self.extra(card)
        )
    }
}

/// Discounted deal with a struck list price and a timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlashDealCard;

impl CardTemplate for FlashDealCard {
    fn card_class(&self) -> &'static str {
        "deal-card carousel-card"
    }

    /// `"<v>% OFF"` for percentages, the bare label (`"Sale"`) otherwise.
    fn badge(&self, card: &CardViewModel) -> Option<String> {
        let label = if card.discount.ends_with('%') {
            format!("{} OFF", card.discount)
        } else {
            card.discount.clone()
        };
        Some(format!(
            r#"<div class="discount-badge">{}</div>
    "#,
            html_escape(&label)
        ))
    }

    fn price(&self, card: &CardViewModel) -> String {
        format!(
            r#"<div class="price-container">
            <span class="original-price">{}</span>
            <span class="sale-price">{}</span>
        </div>"#,
            card.original_price,
            card.display_price()
        )
    }

    fn extra(&self, card: &CardViewModel) -> String {
        format!(
            r#"<div class="timer-container">
            <span class="timer-value">{} left</span>
        </div>
        "#,
            html_escape(&card.time_left)
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NewArrivalCard;

impl CardTemplate for NewArrivalCard {
    fn card_class(&self) -> &'static str {
        "product-card new-arrival-card carousel-card"
    }

    fn badge(&self, _card: &CardViewModel) -> Option<String> {
        Some("<div class=\"new-badge\">NEW</div>\n    ".to_string())
    }
}

/// Popular product with its star rating.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestSellerCard;

impl CardTemplate for BestSellerCard {
    fn card_class(&self) -> &'static str {
        "product-card best-seller-card carousel-card"
    }

    fn badge(&self, _card: &CardViewModel) -> Option<String> {
        Some("<div class=\"bestseller-badge\">Best Seller</div>\n    ".to_string())
    }

    fn price(&self, card: &CardViewModel) -> String {
        format!(r#"<div class="price">{}</div>"#, card.display_price())
    }

    fn extra(&self, card: &CardViewModel) -> String {
        format!(
            r#"<div class="rating">
            <span class="stars" aria-label="{:.1} out of 5">{}</span>
            <span class="review-count">({})</span>
        </div>
        "#,
            card.rating,
            star_glyphs(card.rating),
            card.review_count
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCard;

impl CardTemplate for PlainCard {
    fn card_class(&self) -> &'static str {
        "product-card carousel-card"
    }
}

/// Five stars: `floor(rating)` filled, the rest empty.
pub fn star_glyphs(rating: f32) -> String {
    let rating = if rating.is_finite() { rating } else { 0.0 };
    let filled = rating.clamp(0.0, 5.0).floor() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
