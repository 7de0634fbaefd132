//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_ui::StorefrontConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings, shared with the workload.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Preview defaults.
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(&content, path)
    }

    /// Parse config text; `.json` paths are JSON, anything else TOML.
    pub fn parse(content: &str, path: &str) -> Result<Self> {
        let config: CliConfig = if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .storefront
            .validate()
            .with_context(|| format!("Invalid storefront settings in {}", path))?;
        Ok(config)
    }
}

/// Defaults for `storefront render`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Catalog payload to render when `--payload` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    /// Output file when `--out` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config = CliConfig::parse(
            r#"
[storefront]
media_base_url = "https://media.example.com"
section_cap = 2

[storefront.carousel]
slides_to_show = 3
autoplay = false

[preview]
payload = "fixtures/homepage.json"
"#,
            "storefront.toml",
        )
        .unwrap();

        assert_eq!(config.storefront.media_base_url, "https://media.example.com");
        assert_eq!(config.storefront.section_cap, 2);
        assert_eq!(config.storefront.carousel.slides_to_show, 3);
        assert!(!config.storefront.carousel.autoplay);
        assert_eq!(config.preview.payload.as_deref(), Some("fixtures/homepage.json"));
        assert!(config.preview.out.is_none());
    }

    #[test]
    fn test_parse_json_and_empty() {
        let config =
            CliConfig::parse(r#"{"preview": {"out": "home.html"}}"#, "storefront.json").unwrap();
        assert_eq!(config.preview.out.as_deref(), Some("home.html"));
        assert_eq!(config.storefront, StorefrontConfig::default());

        let empty = CliConfig::parse("", "storefront.toml").unwrap();
        assert_eq!(empty.storefront, StorefrontConfig::default());
    }

    #[test]
    fn test_parse_rejects_invalid_settings() {
        let err = CliConfig::parse("[storefront]\nsection_cap = 0\n", "storefront.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("section_cap"));

        assert!(CliConfig::parse("[storefront.carousel]\nslides_to_show = 0\n", "storefront.toml").is_err());
        assert!(CliConfig::parse("not = [valid", "storefront.toml").is_err());
    }
}
