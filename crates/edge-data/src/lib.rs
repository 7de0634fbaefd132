//! Outbound data access with dependency tagging.
//!
//! - `FetchClient` - Always-fresh JSON fetch over the Spin outbound HTTP API
//! - `DependencyTag` - Semantic dependency categories for logs and metrics
//! - `FetchError` - Transport, status and decoding failures

mod client;
mod dependency;

pub use client::*;
pub use dependency::*;
