//! Platform fetch client with dependency tagging.

use std::time::{Duration, Instant};

use edge_core::RequestId;
use serde::de::DeserializeOwned;
use spin_sdk::http::{Method, Request, Response};

use crate::dependency::DependencyTag;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// A decoded response plus what it cost to get it.
#[derive(Debug)]
pub struct Fetched<T> {
    /// Decoded body.
    pub value: T,
    /// HTTP status code.
    pub status: u16,
    /// Raw body size.
    pub bytes: usize,
    /// Wall time of the round trip.
    pub elapsed: Duration,
}

/// Platform-controlled fetch client.
///
/// Every request is sent with `cache-control: no-cache`; aggregate endpoints
/// must be read fresh on every page render.
pub struct FetchClient {
    request_id: RequestId,
}

impl FetchClient {
    /// Create a new fetch client.
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    /// Fetch and decode a JSON document.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        tag: DependencyTag,
    ) -> Result<Fetched<T>, FetchError> {
        let started = Instant::now();

        let req = Request::builder()
            .method(Method::Get)
            .uri(url)
            .header("accept", "application/json")
            .header("cache-control", "no-cache")
            .header("x-request-id", self.request_id.as_str())
            .header("x-dependency", tag.name())
            .build();

        let resp: Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *resp.status();
        let body = resp.body();
        let value = decode_response(status, url, body)?;

        Ok(Fetched {
            value,
            status,
            bytes: body.len(),
            elapsed: started.elapsed(),
        })
    }
}

/// Turn a raw status + body into a decoded value.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    url: &str,
    body: &[u8],
) -> Result<T, FetchError> {
    if status >= 400 {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }

    serde_json::from_slice(body).map_err(|e| FetchError::Deserialization(e.to_string()))
}
