//! Core request abstractions for the storefront streaming SSR platform.
//!
//! This crate provides the fundamental types shared by every workload:
//! - `RequestContext` - Method, path, query and headers of one request
//! - `RequestId` - Correlation id for logs and metrics
//! - `TimingContext` / `Mark` / `LifecyclePhase` - Request timeline
//! - `WorkloadError` - Platform-level failures

mod context;
mod error;
mod lifecycle;

pub use context::*;
pub use error::*;
pub use lifecycle::*;

pub use http::Method;
