//! CLI command implementations.

pub mod breakpoints;
pub mod render;
pub mod time_left;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use storefront_catalog::countdown::parse_deadline;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog payload (JSON). Without one the empty storefront is rendered.
    #[arg(short, long)]
    pub payload: Option<String>,

    /// Write the page to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Render as of this instant (RFC 3339) instead of the current time.
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the breakpoints command.
#[derive(Args)]
pub struct BreakpointsArgs {
    /// Base slides to show (default: from config).
    #[arg(short, long)]
    pub slides: Option<u32>,

    /// Also show the slide count at this viewport width.
    #[arg(short, long)]
    pub width: Option<u32>,
}

/// Arguments for the time-left command.
#[derive(Args)]
pub struct TimeLeftArgs {
    /// Deal deadline (RFC 3339).
    pub deadline: String,

    /// Reference instant (RFC 3339) instead of the current time.
    #[arg(long)]
    pub now: Option<String>,
}

/// The `--now` override, or the current time.
pub fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => parse_deadline(raw).with_context(|| format!("Invalid --now value: {}", raw)),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_now() {
        let now = resolve_now(Some("2024-06-01T12:00:00Z")).unwrap();
        assert_eq!(now.to_rfc3339(), "2024-06-01T12:00:00+00:00");
        assert!(resolve_now(Some("noon")).is_err());
        assert!(resolve_now(None).is_ok());
    }
}
