//! Raw records as served by the catalog aggregate endpoint.
//!
//! The catalog serializes decimals as strings (`"999.00"`) and ids as
//! numbers, and older deployments omit whole sections. Decoding here never
//! fails on a bad field: the field reads as absent, a bad list entry is
//! dropped, and a section that is not a list reads as empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::countdown::parse_deadline;
use crate::error::CatalogError;

/// One product as received from the catalog service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// List price used by phones and accessories.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<f64>,
    /// List price used by flash deals.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub original_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub sale_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discount_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    /// Deal expiry (flash deals).
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    /// Deal expiry (products carrying a flash deal).
    #[serde(default, deserialize_with = "lenient_string")]
    pub flash_deal_end: Option<String>,
    /// `"phone"` or `"accessory"` on flash deals.
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub review_count: Option<u32>,
}

impl ProductRecord {
    /// The deal deadline: the first of `end_date`, `flash_deal_end` that parses.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        [self.end_date.as_deref(), self.flash_deal_end.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|raw| parse_deadline(raw).ok())
    }
}

/// A section split by product family.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SectionPair {
    #[serde(default, deserialize_with = "lenient_records")]
    pub phones: Vec<ProductRecord>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub accessories: Vec<ProductRecord>,
}

impl SectionPair {
    pub const EMPTY: SectionPair = SectionPair {
        phones: Vec::new(),
        accessories: Vec::new(),
    };

    pub fn len(&self) -> usize {
        self.phones.len() + self.accessories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The homepage aggregate document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HomepagePayload {
    #[serde(default, deserialize_with = "lenient_records")]
    pub flash_deals: Vec<ProductRecord>,
    #[serde(default, deserialize_with = "lenient_pair")]
    pub new_arrivals: SectionPair,
    #[serde(default, deserialize_with = "lenient_pair")]
    pub best_sellers: SectionPair,
}

/// The shape substituted whenever the aggregate cannot be fetched or read.
pub const EMPTY_HOMEPAGE: HomepagePayload = HomepagePayload {
    flash_deals: Vec::new(),
    new_arrivals: SectionPair::EMPTY,
    best_sellers: SectionPair::EMPTY,
};

impl HomepagePayload {
    /// Decode the raw aggregate document.
    ///
    /// Fails only when the document is not JSON or not an object; inner
    /// damage degrades to empty sections.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Decode an already-parsed aggregate document.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        if !value.is_object() {
            return Err(CatalogError::MalformedPayload(format!(
                "expected an object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Total number of raw records across all sections.
    pub fn record_count(&self) -> usize {
        self.flash_deals.len() + self.new_arrivals.len() + self.best_sellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<ProductRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_pair<'de, D>(deserializer: D) -> Result<SectionPair, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        _ => SectionPair::default(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
