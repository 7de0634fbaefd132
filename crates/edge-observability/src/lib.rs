//! Structured logging and request metrics for streaming SSR workloads.
//!
//! - `StructuredLogger` - Request-scoped JSON/human log lines on stderr
//! - `MetricsCollector` - Shell, section and dependency timings per request

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

pub use edge_core::{RequestId, TimingContext};
