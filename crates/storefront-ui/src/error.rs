//! Error types for the storefront UI.

use thiserror::Error;

/// Invalid carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("{field} must be at least 1")]
    ZeroSlides { field: &'static str },

    #[error("breakpoint {max_width}px shows {slides} slides, more than the base {base}")]
    ExceedsBase { max_width: u32, slides: u32, base: u32 },

    #[error("breakpoint {narrower}px shows more slides than the wider {wider}px")]
    NotMonotonic { wider: u32, narrower: u32 },

    #[error("unknown carousel type '{0}'")]
    UnknownKind(String),
}

/// Invalid storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Carousel(#[from] CarouselError),
}
