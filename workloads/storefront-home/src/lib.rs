//! Storefront homepage - streaming SSR workload.
//!
//! One catalog fetch per request, then the page streams shell-first:
//! - `GET /api/homepage/` on the catalog service, never cached
//! - Any fetch or decode failure renders the empty storefront
//! - Hero, promotions, three product carousels, tiles, bundles,
//!   testimonials and newsletter, in page order

use anyhow::{anyhow, Context};
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use edge_sdk::edge_core::{self, RequestContext, WorkloadError};
use edge_sdk::edge_data::{DependencyTag, FetchClient};
use edge_sdk::edge_observability::{DependencyMetrics, MetricsCollector, StructuredLogger};
use edge_sdk::edge_streaming::StreamingSink;

use storefront_catalog::prelude::*;
use storefront_ui::{ConfigError, HomePage, HomepageContent, StorefrontConfig};

const WORKLOAD: &str = "storefront-home";

/// Homepage handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    if let Err(e) = serve(req, response_out).await {
        eprintln!("{}: {:#}", WORKLOAD, e);
    }
}

async fn serve(req: IncomingRequest, response_out: ResponseOutparam) -> anyhow::Result<()> {
    let path = req.path_with_query().unwrap_or_default();
    let headers = req
        .headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()));
    let ctx = RequestContext::new(edge_method(&req.method()), &path).with_headers(headers);
    let request_id = ctx.request_id.clone();

    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    };

    let logger = StructuredLogger::new(request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(&ctx.path)
        .with_min_level(config.log_level)
        .with_format(config.log_format);

    if let Some(e) = config_error {
        logger
            .warn_builder("Invalid configuration, using defaults")
            .field("error", e.to_string())
            .emit();
    }

    if req.method() != Method::Get {
        logger
            .warn_builder(WorkloadError::MethodNotAllowed(ctx.method.clone()).to_string())
            .emit();
        let response = start_response(405, &[("allow".to_owned(), b"GET".to_vec())])?;
        response_out.set(response);
        return Ok(());
    }

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload(WORKLOAD);

    logger
        .info_builder("Homepage request started")
        .field("user_agent", ctx.header("user-agent").unwrap_or("-"))
        .field("utm_source", ctx.query_param("utm_source").unwrap_or("-"))
        .emit();

    let carousel = match config.carousel.to_config() {
        Ok(carousel) => carousel,
        Err(e) => {
            logger
                .warn_builder("Invalid carousel settings, using defaults")
                .field("error", e.to_string())
                .emit();
            Default::default()
        }
    };

    let client = FetchClient::new(request_id.clone());
    let payload = fetch_homepage(&client, &config.homepage_url(), &logger, &mut metrics).await;

    let now = Utc::now();
    let sections = HomepageSections::from_payload(&payload, &config.mapper_config(), now);
    logger
        .info_builder("Catalog mapped")
        .field_u64("flash_deals", sections.flash_deals.len() as u64)
        .field_u64("new_arrivals", sections.new_arrivals.len() as u64)
        .field_u64("best_sellers", sections.best_sellers.len() as u64)
        .emit();

    let page = HomePage::new(sections, HomepageContent::default(), carousel, now);

    let response = start_response(
        200,
        &[
            ("content-type".to_owned(), b"text/html; charset=utf-8".to_vec()),
            ("x-request-id".to_owned(), request_id.to_string().into_bytes()),
            ("cache-control".to_owned(), b"private, no-cache".to_vec()),
        ],
    )?;
    let body = response.take_body();
    response_out.set(response);

    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    if let Err(e) = page.stream(&mut sink, &mut metrics).await {
        logger
            .error_builder("Streaming stopped")
            .field("error", e.to_string())
            .field("phase", format!("{:?}", sink.phase()))
            .emit();
    }

    let final_metrics = metrics.finalize(Some(200));
    logger
        .info_builder("Homepage request complete")
        .field_u64("bytes", sink.bytes_sent() as u64)
        .field_u64("sections", sink.sections_sent().len() as u64)
        .emit();
    eprintln!("{}", final_metrics.to_json());

    Ok(())
}

/// Fetch the catalog aggregate. Every failure yields the empty homepage.
async fn fetch_homepage(
    client: &FetchClient,
    url: &str,
    logger: &StructuredLogger,
    metrics: &mut MetricsCollector,
) -> HomepagePayload {
    let tag = DependencyTag::Catalog;
    let started = std::time::Instant::now();

    let fetched = match client.fetch::<serde_json::Value>(url, tag).await {
        Ok(fetched) => fetched,
        Err(e) => {
            metrics.record_dependency(DependencyMetrics::failure(
                tag.name(),
                url,
                started.elapsed(),
                e.to_string(),
            ));
            logger
                .warn_builder("Catalog fetch failed, rendering empty storefront")
                .field("url", url)
                .field_bool("critical", tag.is_critical())
                .field("error", e.to_string())
                .emit();
            return EMPTY_HOMEPAGE;
        }
    };

    metrics.record_dependency(DependencyMetrics::success(
        tag.name(),
        url,
        fetched.elapsed,
        fetched.status,
        fetched.bytes,
    ));

    match HomepagePayload::from_value(fetched.value) {
        Ok(payload) => {
            logger
                .debug_builder("Catalog fetched")
                .field_u64("records", payload.record_count() as u64)
                .duration_ms("elapsed_ms", fetched.elapsed)
                .emit();
            payload
        }
        Err(e) => {
            logger
                .warn_builder("Catalog payload unreadable, rendering empty storefront")
                .field("error", e.to_string())
                .emit();
            EMPTY_HOMEPAGE
        }
    }
}

/// Settings from Spin variables, defaults for anything unset.
fn load_config() -> Result<StorefrontConfig, ConfigError> {
    StorefrontConfig::default().with_lookup(|key| spin_sdk::variables::get(key).ok())
}

fn start_response(status: u16, headers: &[(String, Vec<u8>)]) -> anyhow::Result<OutgoingResponse> {
    let fields =
        Fields::from_list(headers).map_err(|e| anyhow!("invalid response headers: {:?}", e))?;
    let response = OutgoingResponse::new(fields);
    response
        .set_status_code(status)
        .map_err(|()| anyhow!("invalid status code {}", status))
        .context("building response")?;
    Ok(response)
}

fn edge_method(method: &Method) -> edge_core::Method {
    match method {
        Method::Get => edge_core::Method::GET,
        Method::Head => edge_core::Method::HEAD,
        Method::Post => edge_core::Method::POST,
        Method::Put => edge_core::Method::PUT,
        Method::Delete => edge_core::Method::DELETE,
        Method::Patch => edge_core::Method::PATCH,
        Method::Options => edge_core::Method::OPTIONS,
        Method::Connect => edge_core::Method::CONNECT,
        Method::Trace => edge_core::Method::TRACE,
        Method::Other(other) => {
            edge_core::Method::from_bytes(other.as_bytes()).unwrap_or(edge_core::Method::GET)
        }
    }
}
