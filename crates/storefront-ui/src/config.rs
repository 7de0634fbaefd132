//! Storefront configuration.
//!
//! Every field has a default, so an empty TOML file, an empty JSON object or
//! a host with no variables set all yield a working storefront.

use edge_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use storefront_catalog::MapperConfig;

use crate::carousel::CarouselConfig;
use crate::error::ConfigError;

/// Slider behaviour shared by the product carousels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub slides_to_show: u32,
    pub slides_to_scroll: u32,
    pub autoplay: bool,
    pub autoplay_speed_ms: u32,
    pub speed_ms: u32,
    pub infinite: bool,
    pub dots: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            slides_to_show: 4,
            slides_to_scroll: 1,
            autoplay: true,
            autoplay_speed_ms: 3000,
            speed_ms: 500,
            infinite: true,
            dots: true,
        }
    }
}

impl CarouselSettings {
    /// Build and check the slider settings.
    pub fn to_config(&self) -> Result<CarouselConfig, ConfigError> {
        let config = CarouselConfig::for_slides(self.slides_to_show)
            .with_slides_to_scroll(self.slides_to_scroll)
            .with_autoplay(self.autoplay, self.autoplay_speed_ms)
            .with_speed(self.speed_ms)
            .with_infinite(self.infinite)
            .with_dots(self.dots);
        config.validate()?;
        Ok(config)
    }
}

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Catalog service origin.
    pub catalog_base_url: String,
    /// Aggregate endpoint path.
    pub homepage_path: String,
    /// Prefix for relative product image paths.
    pub media_base_url: String,
    pub placeholder_image: String,
    /// Cards per product section.
    pub section_cap: usize,
    pub carousel: CarouselSettings,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let mapper = MapperConfig::default();
        Self {
            catalog_base_url: "http://127.0.0.1:8000".to_string(),
            homepage_path: "/api/homepage/".to_string(),
            media_base_url: mapper.media_base_url,
            placeholder_image: mapper.placeholder_image,
            section_cap: mapper.section_cap,
            carousel: CarouselSettings::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Json,
        }
    }
}

impl StorefrontConfig {
    /// Full URL of the aggregate endpoint.
    pub fn homepage_url(&self) -> String {
        format!(
            "{}/{}",
            self.catalog_base_url.trim_end_matches('/'),
            self.homepage_path.trim_start_matches('/')
        )
    }

    pub fn mapper_config(&self) -> MapperConfig {
        MapperConfig {
            section_cap: self.section_cap,
            media_base_url: self.media_base_url.clone(),
            placeholder_image: self.placeholder_image.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.section_cap == 0 {
            return Err(ConfigError::InvalidValue {
                key: "section_cap",
                value: "0".to_string(),
            });
        }
        self.carousel.to_config()?;
        Ok(())
    }

    /// Overlay values from a flat key lookup (host variables, environment).
    ///
    /// Absent keys keep their current value; present but unparsable values
    /// are errors.
    pub fn with_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("catalog_base_url") {
            self.catalog_base_url = v;
        }
        if let Some(v) = get("homepage_path") {
            self.homepage_path = v;
        }
        if let Some(v) = get("media_base_url") {
            self.media_base_url = v;
        }
        if let Some(v) = get("placeholder_image") {
            self.placeholder_image = v;
        }
        if let Some(v) = get("section_cap") {
            self.section_cap = parse("section_cap", &v)?;
        }
        if let Some(v) = get("slides_to_show") {
            self.carousel.slides_to_show = parse("slides_to_show", &v)?;
        }
        if let Some(v) = get("autoplay") {
            self.carousel.autoplay = parse("autoplay", &v)?;
        }
        if let Some(v) = get("log_level") {
            self.log_level = parse("log_level", &v)?;
        }
        if let Some(v) = get("log_format") {
            self.log_format = parse("log_format", &v)?;
        }

        self.validate()?;
        Ok(self)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.homepage_url(), "http://127.0.0.1:8000/api/homepage/");
        assert_eq!(config.section_cap, 3);
        assert_eq!(config.mapper_config(), MapperConfig::default());
        assert_eq!(config.carousel.to_config().unwrap(), CarouselConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_documents_use_defaults() {
        let from_json: StorefrontConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(from_json, StorefrontConfig::default());

        let partial: StorefrontConfig =
            serde_json::from_str(r#"{"section_cap": 5, "carousel": {"autoplay": false}, "log_format": "human"}"#)
                .unwrap();
        assert_eq!(partial.section_cap, 5);
        assert!(!partial.carousel.autoplay);
        assert_eq!(partial.carousel.slides_to_show, 4);
        assert_eq!(partial.log_format, LogFormat::Human);
    }

    #[test]
    fn test_lookup_overlay() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("catalog_base_url", "https://catalog.internal/"),
            ("homepage_path", "api/homepage/"),
            ("section_cap", "4"),
            ("log_level", "debug"),
            ("media_base_url", ""),
        ]);
        let config = StorefrontConfig::default()
            .with_lookup(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.homepage_url(), "https://catalog.internal/api/homepage/");
        assert_eq!(config.section_cap, 4);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.media_base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_lookup_rejects_bad_values() {
        let err = StorefrontConfig::default()
            .with_lookup(|key| (key == "section_cap").then(|| "three".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "section_cap",
                value: "three".to_string()
            }
        );

        let err = StorefrontConfig::default()
            .with_lookup(|key| (key == "section_cap").then(|| "0".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "section_cap", .. }));
    }
}
