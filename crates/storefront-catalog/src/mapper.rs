//! Shape the catalog aggregate into card lists.

use chrono::{DateTime, Utc};

use crate::card::{CardViewModel, ProductKind};
use crate::countdown::time_left;
use crate::price::{percent_label, Price};
use crate::record::{HomepagePayload, ProductRecord, SectionPair};

/// Shown when a record carries no usable deadline.
pub const FALLBACK_TIME_LEFT: &str = "5h 23m";

/// Shown when a record carries no discount percentage.
pub const FALLBACK_DISCOUNT: &str = "Sale";

const UNTITLED: &str = "Untitled product";

/// Mapper settings.
#[derive(Debug, Clone, PartialEq)]
pub struct MapperConfig {
    /// Maximum cards per section.
    pub section_cap: usize,
    /// Prefix for relative image paths.
    pub media_base_url: String,
    /// Image used when a record has none.
    pub placeholder_image: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            section_cap: 3,
            media_base_url: "http://127.0.0.1:8000".to_string(),
            placeholder_image: "/images/placeholder.png".to_string(),
        }
    }
}

impl MapperConfig {
    /// Resolve a record image to something the browser can load.
    pub fn resolve_image(&self, image_url: Option<&str>) -> String {
        match image_url {
            None => self.placeholder_image.clone(),
            Some(url) if is_absolute(url) => url.to_string(),
            Some(path) => format!(
                "{}/{}",
                self.media_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// The three product sections of the homepage, ready to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomepageSections {
    pub flash_deals: Vec<CardViewModel>,
    pub new_arrivals: Vec<CardViewModel>,
    pub best_sellers: Vec<CardViewModel>,
    /// Earliest deadline among the displayed flash deals.
    pub earliest_deal_end: Option<DateTime<Utc>>,
}

impl HomepageSections {
    /// Map every section, capping each at `config.section_cap`.
    ///
    /// Phones come before accessories; the cap applies after that
    /// concatenation. Records that cannot be linked are skipped.
    pub fn from_payload(
        payload: &HomepagePayload,
        config: &MapperConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let cap = config.section_cap;

        let flash: Vec<(CardViewModel, Option<DateTime<Utc>>)> = payload
            .flash_deals
            .iter()
            .filter_map(|record| flash_card(record, config, now))
            .take(cap)
            .collect();
        let earliest_deal_end = flash.iter().filter_map(|(_, end)| *end).min();
        let flash_deals = flash.into_iter().map(|(card, _)| card).collect();

        Self {
            flash_deals,
            new_arrivals: pair_cards(&payload.new_arrivals, config, now, false),
            best_sellers: pair_cards(&payload.best_sellers, config, now, true),
            earliest_deal_end,
        }
    }

    /// An empty page worth of sections.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.flash_deals.is_empty() && self.new_arrivals.is_empty() && self.best_sellers.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.flash_deals.len() + self.new_arrivals.len() + self.best_sellers.len()
    }
}

fn pair_cards(
    pair: &SectionPair,
    config: &MapperConfig,
    now: DateTime<Utc>,
    with_rating: bool,
) -> Vec<CardViewModel> {
    let phones = pair.phones.iter().map(|r| (r, ProductKind::Phone));
    let accessories = pair.accessories.iter().map(|r| (r, ProductKind::Accessory));

    phones
        .chain(accessories)
        .filter_map(|(record, kind)| {
            let mut card = base_card(record, kind, config, now)?;
            card.original_price = Price::from_decimal(record.price.unwrap_or(0.0));
            card.sale_price = record.sale_price.map(Price::from_decimal);
            if with_rating {
                card.rating = record.rating.unwrap_or(0.0).clamp(0.0, 5.0) as f32;
                card.review_count = record.review_count.unwrap_or(0);
            }
            Some(card)
        })
        .take(config.section_cap)
        .collect()
}

fn flash_card(
    record: &ProductRecord,
    config: &MapperConfig,
    now: DateTime<Utc>,
) -> Option<(CardViewModel, Option<DateTime<Utc>>)> {
    let kind = record
        .product_type
        .as_deref()
        .and_then(ProductKind::from_tag)
        .unwrap_or(ProductKind::Phone);

    let mut card = base_card(record, kind, config, now)?;
    card.id = format!("flash-{}", record.id.as_deref().unwrap_or(&card.slug));

    let original = Price::from_decimal(record.original_price.or(record.price).unwrap_or(0.0));
    card.original_price = original;
    card.sale_price = match (record.sale_price, record.discount_percentage) {
        (Some(sale), _) => Some(Price::from_decimal(sale)),
        (None, Some(pct)) => Some(original.apply_discount(pct)),
        (None, None) => None,
    };

    Some((card, record.deadline()))
}

/// Fields shared by every section. `None` when the record has no way to be linked.
fn base_card(
    record: &ProductRecord,
    kind: ProductKind,
    config: &MapperConfig,
    now: DateTime<Utc>,
) -> Option<CardViewModel> {
    let slug = record.slug.clone().or_else(|| record.id.clone())?;
    let raw_id = record.id.clone().unwrap_or_else(|| slug.clone());

    let id = match kind {
        ProductKind::Phone => format!("phone-{raw_id}"),
        ProductKind::Accessory => format!("accessory-{raw_id}"),
    };

    let discount = record
        .discount_percentage
        .map(percent_label)
        .unwrap_or_else(|| FALLBACK_DISCOUNT.to_string());

    let remaining = record
        .deadline()
        .map(|deadline| time_left(deadline, now))
        .unwrap_or_else(|| FALLBACK_TIME_LEFT.to_string());

    Some(CardViewModel {
        id,
        name: record.name.clone().unwrap_or_else(|| UNTITLED.to_string()),
        original_price: Price::ZERO,
        sale_price: None,
        image: config.resolve_image(record.image_url.as_deref()),
        discount,
        time_left: remaining,
        slug,
        product_type: kind,
        rating: 0.0,
        review_count: 0,
    })
}
