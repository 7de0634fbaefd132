//! Server-rendered storefront homepage.
//!
//! - `carousel` - product carousel, card templates, responsive breakpoints
//! - `sections` - hero, promotions, tiles, bundles, testimonials, newsletter
//! - `content` - static marketing content
//! - `page` - `HomePage`: shell, section order, streaming
//! - `config` - `StorefrontConfig`
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//! use storefront_ui::{HomePage, HomepageContent, StorefrontConfig};
//!
//! let config = StorefrontConfig::default();
//! let sections = HomepageSections::from_payload(&payload, &config.mapper_config(), Utc::now());
//! let page = HomePage::new(sections, HomepageContent::default(), config.carousel.to_config()?, Utc::now());
//! page.stream(&mut sink, &mut metrics).await?;
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod sections;

mod escape;

pub use carousel::{
    Carousel, CarouselConfig, CarouselKind, CardTemplate, MountedCarousel, ResizeEvents,
    ResizeSubscription, EMPTY_MESSAGE,
};
pub use config::{CarouselSettings, StorefrontConfig};
pub use content::HomepageContent;
pub use error::{CarouselError, ConfigError};
pub use page::{HomePage, RenderedSection, SECTION_ORDER};
