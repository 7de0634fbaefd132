//! Per-request timing metrics.

use std::time::{Duration, Instant};

use edge_core::RequestId;
use serde::Serialize;

/// Metrics for one finished request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first section (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_section_us: Option<u64>,
    /// Sections in the order they were started.
    pub sections: Vec<SectionMetrics>,
    /// Outbound dependency calls.
    pub dependencies: Vec<DependencyMetrics>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a single section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionMetrics {
    pub name: String,
    /// Time from request start to section start (microseconds).
    pub start_us: u64,
    /// Section render + write duration (microseconds).
    pub duration_us: u64,
    /// Bytes sent for this section.
    pub bytes: usize,
    /// Whether the section rendered its empty/fallback state.
    pub used_fallback: bool,
}

/// Metrics for a dependency fetch.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyMetrics {
    pub tag: String,
    pub url: String,
    pub duration_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DependencyMetrics {
    /// A successful call.
    pub fn success(tag: &str, url: &str, duration: Duration, status: u16, bytes: usize) -> Self {
        Self {
            tag: tag.to_string(),
            url: url.to_string(),
            duration_us: duration.as_micros() as u64,
            status_code: Some(status),
            response_bytes: Some(bytes),
            error: None,
        }
    }

    /// A failed call.
    pub fn failure(tag: &str, url: &str, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            tag: tag.to_string(),
            url: url.to_string(),
            duration_us: duration.as_micros() as u64,
            status_code: None,
            response_bytes: None,
            error: Some(error.into()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug)]
struct OpenSection {
    name: String,
    start: Instant,
    sent: Option<Instant>,
    bytes: usize,
    used_fallback: bool,
}

/// Collector for request metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    first_section_sent: Option<Instant>,
    sections: Vec<OpenSection>,
    dependencies: Vec<DependencyMetrics>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            start: Instant::now(),
            shell_sent: None,
            first_section_sent: None,
            sections: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    pub fn record_section_start(&mut self, name: &str) {
        self.sections.push(OpenSection {
            name: name.to_string(),
            start: Instant::now(),
            sent: None,
            bytes: 0,
            used_fallback: false,
        });
    }

    /// Record section sent. A section never started is recorded as instant.
    pub fn record_section_sent(&mut self, name: &str, bytes: usize, used_fallback: bool) {
        let now = Instant::now();
        self.first_section_sent.get_or_insert(now);

        match self
            .sections
            .iter_mut()
            .rev()
            .find(|s| s.name == name && s.sent.is_none())
        {
            Some(section) => {
                section.sent = Some(now);
                section.bytes = bytes;
                section.used_fallback = used_fallback;
            }
            None => self.sections.push(OpenSection {
                name: name.to_string(),
                start: now,
                sent: Some(now),
                bytes,
                used_fallback,
            }),
        }
    }

    pub fn record_dependency(&mut self, metrics: DependencyMetrics) {
        self.dependencies.push(metrics);
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        let now = Instant::now();
        let start = self.start;
        let micros = |d: Duration| d.as_micros() as u64;

        let sections = self
            .sections
            .into_iter()
            .map(|s| {
                let sent = s.sent.unwrap_or(now);
                SectionMetrics {
                    name: s.name,
                    start_us: micros(s.start.duration_since(start)),
                    duration_us: micros(sent.duration_since(s.start)),
                    bytes: s.bytes,
                    used_fallback: s.used_fallback,
                }
            })
            .collect();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            time_to_shell_us: self.shell_sent.map(|t| micros(t.duration_since(start))),
            time_to_first_section_us: self
                .first_section_sent
                .map(|t| micros(t.duration_since(start))),
            sections,
            dependencies: self.dependencies,
            total_duration_us: micros(now.duration_since(start)),
            status_code,
        }
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let ms = |us: u64| us as f64 / 1000.0;
        let mut lines = vec![format!("Request: {}", self.request_id)];

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!("  Time to shell: {:.2}ms", ms(tts)));
        }
        if let Some(ttfs) = self.time_to_first_section_us {
            lines.push(format!("  Time to first section: {:.2}ms", ms(ttfs)));
        }
        lines.push(format!("  Total: {:.2}ms", ms(self.total_duration_us)));

        if !self.sections.is_empty() {
            lines.push("  Sections:".to_string());
            for section in &self.sections {
                let fallback = if section.used_fallback { " [empty]" } else { "" };
                lines.push(format!(
                    "    {}: {:.2}ms, {} bytes{}",
                    section.name,
                    ms(section.duration_us),
                    section.bytes,
                    fallback
                ));
            }
        }

        if !self.dependencies.is_empty() {
            lines.push("  Dependencies:".to_string());
            for dep in &self.dependencies {
                let status = match (&dep.error, dep.status_code) {
                    (None, Some(code)) => code.to_string(),
                    _ => "FAILED".to_string(),
                };
                lines.push(format!(
                    "    {} [{}]: {:.2}ms - {}",
                    dep.tag,
                    status,
                    ms(dep.duration_us),
                    dep.url
                ));
            }
        }

        lines.join("\n")
    }
}
