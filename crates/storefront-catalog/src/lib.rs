//! Catalog records and card view-models for the storefront homepage.
//!
//! The catalog service answers one aggregate document per page view. This
//! crate decodes it leniently and shapes it into what the page renders:
//!
//! - **Records**: `HomepagePayload`, `ProductRecord`, `EMPTY_HOMEPAGE`
//! - **Cards**: `CardViewModel`, `ProductKind`, `Price`
//! - **Mapping**: `HomepageSections::from_payload` with per-section caps
//! - **Countdown**: remaining-time labels for flash deals
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let payload = HomepagePayload::from_slice(&body).unwrap_or(EMPTY_HOMEPAGE);
//! let sections = HomepageSections::from_payload(&payload, &MapperConfig::default(), Utc::now());
//! for card in &sections.flash_deals {
//!     println!("{} {} ({})", card.name, card.display_price(), card.time_left);
//! }
//! ```

pub mod card;
pub mod countdown;
pub mod error;
pub mod mapper;
pub mod price;
pub mod record;

pub use card::{CardViewModel, ProductKind};
pub use error::CatalogError;
pub use mapper::{HomepageSections, MapperConfig};
pub use price::Price;
pub use record::{HomepagePayload, ProductRecord, SectionPair, EMPTY_HOMEPAGE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{CardViewModel, ProductKind};
    pub use crate::countdown::{countdown_clock, parse_deadline, time_left};
    pub use crate::error::CatalogError;
    pub use crate::mapper::{HomepageSections, MapperConfig, FALLBACK_DISCOUNT, FALLBACK_TIME_LEFT};
    pub use crate::price::Price;
    pub use crate::record::{HomepagePayload, ProductRecord, SectionPair, EMPTY_HOMEPAGE};
    pub use chrono::{DateTime, Utc};
}
