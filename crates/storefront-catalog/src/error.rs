//! Catalog error types.

use thiserror::Error;

/// Errors raised while decoding catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The aggregate document is not a JSON object of the expected shape.
    #[error("Malformed homepage payload: {0}")]
    MalformedPayload(String),

    /// A deadline could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::MalformedPayload(e.to_string())
    }
}
