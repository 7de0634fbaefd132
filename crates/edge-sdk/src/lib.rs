//! Public SDK for the storefront streaming SSR platform.
//!
//! Workloads depend on this crate alone:
//!
//! ```ignore
//! use edge_sdk::prelude::*;
//!
//! let ctx = RequestContext::new(Method::GET, path);
//! let logger = StructuredLogger::new(ctx.request_id.clone());
//! let client = FetchClient::new(ctx.request_id.clone());
//!
//! let data = client.fetch::<MyData>(url, DependencyTag::Catalog).await?;
//!
//! sink.send_shell(&shell.render_opening()).await?;
//! sink.send_section("content", &render(&data.value)).await?;
//! ```

pub use edge_core;
pub use edge_data;
pub use edge_observability;
pub use edge_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use edge_core::*;
    pub use edge_data::*;
    pub use edge_observability::*;
    pub use edge_streaming::*;
}
