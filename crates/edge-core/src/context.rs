//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use http::Method;

use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:04x}", nanos, seq & 0xffff))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers, keyed by lowercase name.
pub type Headers = HashMap<String, String>;

/// Typed request context passed to workload handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context from a path that may carry a query string.
    pub fn new(method: Method, path_with_query: impl AsRef<str>) -> Self {
        let raw = path_with_query.as_ref();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (raw, HashMap::new()),
        };
        let path = if path.is_empty() { "/" } else { path };

        Self {
            request_id: RequestId::generate(),
            method,
            path: path.to_string(),
            query,
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Attach request headers. An upstream `x-request-id` is adopted.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers
                .insert(name.as_ref().to_ascii_lowercase(), value.into());
        }
        if let Some(id) = self.headers.get("x-request-id").filter(|v| !v.is_empty()) {
            self.request_id = RequestId::from_string(id.clone());
        }
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }
}

fn parse_query(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_path_and_query_split() {
        let ctx = RequestContext::new(Method::GET, "/?utm_source=mail&preview");
        assert_eq!(ctx.path, "/");
        assert_eq!(ctx.query_param("utm_source"), Some("mail"));
        assert_eq!(ctx.query_param("preview"), Some(""));
    }

    #[test]
    fn test_empty_path_is_root() {
        let ctx = RequestContext::new(Method::GET, "");
        assert_eq!(ctx.path, "/");
    }

    #[test]
    fn test_headers_are_case_insensitive_and_adopt_request_id() {
        let ctx = RequestContext::new(Method::GET, "/")
            .with_headers([("X-Request-Id", "abc-123"), ("Accept", "text/html")]);
        assert_eq!(ctx.request_id.as_str(), "abc-123");
        assert_eq!(ctx.header("accept"), Some("text/html"));
        assert_eq!(ctx.header("ACCEPT"), Some("text/html"));
    }
}
