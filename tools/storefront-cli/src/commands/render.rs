//! Render the homepage from a catalog payload.

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use edge_core::{RequestId, TimingContext};
use edge_observability::MetricsCollector;
use edge_streaming::StreamingSink;
use storefront_catalog::{HomepagePayload, HomepageSections, EMPTY_HOMEPAGE};
use storefront_ui::{HomePage, HomepageContent};

use super::{resolve_now, RenderArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let settings = &ctx.config.storefront;
    let now = resolve_now(args.now.as_deref())?;

    let payload = match args.payload.as_deref().or(ctx.config.preview.payload.as_deref()) {
        Some(path) => load_payload(&ctx.resolve_path(path), ctx),
        None => {
            ctx.output.debug("No payload given, rendering the empty storefront");
            EMPTY_HOMEPAGE
        }
    };

    let carousel = settings
        .carousel
        .to_config()
        .context("Invalid carousel settings")?;
    let sections = HomepageSections::from_payload(&payload, &settings.mapper_config(), now);
    let page = HomePage::new(sections, HomepageContent::default(), carousel, now);

    let mut sink = StreamingSink::new(Vec::<Vec<u8>>::new(), TimingContext::new());
    let mut metrics = MetricsCollector::new(RequestId::generate());
    metrics.set_workload("storefront-preview");
    page.stream(&mut sink, &mut metrics)
        .await
        .context("Failed to stream homepage")?;

    let html = sink.into_inner().concat();
    let report = metrics.finalize(Some(200));

    let Some(out) = args.out.as_deref().or(ctx.config.preview.out.as_deref()) else {
        std::io::stdout()
            .write_all(&html)
            .context("Failed to write page to stdout")?;
        ctx.output.debug(&report.to_summary());
        return Ok(());
    };

    let out_path = ctx.resolve_path(out);
    std::fs::write(&out_path, &html)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output
        .success(&format!("Rendered {} ({})", out_path.display(), format_bytes(html.len() as u64)));
    let page_sections = page.sections();
    ctx.output.kv("flash deals", &page_sections.flash_deals.len().to_string());
    ctx.output.kv("new arrivals", &page_sections.new_arrivals.len().to_string());
    ctx.output.kv("best sellers", &page_sections.best_sellers.len().to_string());
    ctx.output.debug(&report.to_summary());

    Ok(())
}

/// Read a payload file. Unreadable or malformed input falls back to the
/// empty storefront with a warning.
fn load_payload(path: &Path, ctx: &Context) -> HomepagePayload {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            ctx.output
                .warn(&format!("Cannot read {}: {}. Rendering the empty storefront", path.display(), e));
            return EMPTY_HOMEPAGE;
        }
    };

    match HomepagePayload::from_slice(&bytes) {
        Ok(payload) => {
            ctx.output.debug(&format!("Loaded {} catalog records", payload.record_count()));
            payload
        }
        Err(e) => {
            ctx.output
                .warn(&format!("Malformed payload {}: {}. Rendering the empty storefront", path.display(), e));
            EMPTY_HOMEPAGE
        }
    }
}
