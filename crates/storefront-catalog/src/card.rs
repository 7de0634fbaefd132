//! Card view-model shared by carousels and grids.

use std::fmt;

use crate::price::Price;

/// Product family, used for detail-page routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductKind {
    #[default]
    Phone,
    Accessory,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Phone => "phone",
            ProductKind::Accessory => "accessory",
        }
    }

    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "phone" | "phones" => Some(ProductKind::Phone),
            "accessory" | "accessories" => Some(ProductKind::Accessory),
            _ => None,
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a card template needs. Built fresh per render, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    /// Unique within its section (`flash-7`, `phone-3`, `accessory-3`).
    pub id: String,
    pub name: String,
    pub original_price: Price,
    pub sale_price: Option<Price>,
    /// Absolute URL or the placeholder path.
    pub image: String,
    /// `"10%"` or `"Sale"`.
    pub discount: String,
    /// `"2h 5m"`, or the fallback label when no deadline exists.
    pub time_left: String,
    pub slug: String,
    pub product_type: ProductKind,
    /// 0.0..=5.0
    pub rating: f32,
    pub review_count: u32,
}

impl CardViewModel {
    /// Detail-page route: `/product/<type>/<slug>`.
    pub fn detail_href(&self) -> String {
        format!("/product/{}/{}", self.product_type, self.slug)
    }

    /// Sale price when present, list price otherwise.
    pub fn display_price(&self) -> Price {
        self.sale_price.unwrap_or(self.original_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardViewModel {
        CardViewModel {
            id: "phone-1".to_string(),
            name: "Galaxy S24".to_string(),
            original_price: Price::from_decimal(1199.0),
            sale_price: None,
            image: "/images/placeholder.png".to_string(),
            discount: "Sale".to_string(),
            time_left: "5h 23m".to_string(),
            slug: "galaxy-s24".to_string(),
            product_type: ProductKind::Phone,
            rating: 0.0,
            review_count: 0,
        }
    }

    #[test]
    fn test_detail_href() {
        assert_eq!(card().detail_href(), "/product/phone/galaxy-s24");

        let mut accessory = card();
        accessory.product_type = ProductKind::Accessory;
        accessory.slug = "magsafe-charger".to_string();
        assert_eq!(accessory.detail_href(), "/product/accessory/magsafe-charger");
    }

    #[test]
    fn test_display_price_defaults_to_original() {
        let mut card = card();
        assert_eq!(card.display_price(), Price::from_decimal(1199.0));
        card.sale_price = Some(Price::from_decimal(999.0));
        assert_eq!(card.display_price(), Price::from_decimal(999.0));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ProductKind::from_tag("Accessories"), Some(ProductKind::Accessory));
        assert_eq!(ProductKind::from_tag("phone"), Some(ProductKind::Phone));
        assert_eq!(ProductKind::from_tag("tablet"), None);
    }
}
