//! Request lifecycle tracking.

use std::time::{Duration, Instant};

/// Lifecycle phases for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, nothing streamed yet.
    Start,
    /// Shell HTML has been flushed to client.
    ShellSent,
    /// A named section has been sent.
    SectionSent(String),
    /// Request completed successfully.
    Completion,
}

/// A point on the request timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    ShellSent,
    SectionStart(String),
    SectionSent(String),
    Complete,
}

/// Timeline of one request, in the order things happened.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: Vec<(Mark, Instant)>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    pub fn mark(&mut self, mark: Mark) {
        self.marks.push((mark, Instant::now()));
    }

    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(Mark::SectionStart(section.to_string()));
    }

    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(Mark::SectionSent(section.to_string()));
    }

    /// Time since the request started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn time_to_shell(&self) -> Option<Duration> {
        self.offset_of(|m| *m == Mark::ShellSent)
    }

    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.offset_of(|m| matches!(m, Mark::SectionSent(_)))
    }

    /// Sections in the order they reached the client.
    pub fn sent_order(&self) -> Vec<&str> {
        self.marks
            .iter()
            .filter_map(|(mark, _)| match mark {
                Mark::SectionSent(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Start and flush times of one section. `None` until it has been sent.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let at = |wanted: Mark| {
            self.marks
                .iter()
                .find(|(mark, _)| *mark == wanted)
                .map(|(_, at)| *at)
        };
        let start = at(Mark::SectionStart(section.to_string()))?;
        let sent = at(Mark::SectionSent(section.to_string()))?;

        Some(SectionTiming {
            name: section.to_string(),
            start: start.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(start),
        })
    }

    fn offset_of(&self, pred: impl Fn(&Mark) -> bool) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(mark, _)| pred(mark))
            .map(|(_, at)| at.duration_since(self.start))
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing of one streamed section, relative to request start.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    pub name: String,
    pub start: Duration,
    pub sent: Duration,
    /// Render plus write time.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_timing_requires_both_marks() {
        let mut timing = TimingContext::new();
        timing.mark_section_start("hero");
        assert!(timing.section_timing("hero").is_none());

        timing.mark_section_sent("hero");
        let hero = timing.section_timing("hero").unwrap();
        assert_eq!(hero.name, "hero");
        assert!(hero.sent >= hero.start);
    }

    #[test]
    fn test_timeline_order() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_first_section().is_none());
        assert!(timing.time_to_shell().is_none());

        timing.mark(Mark::ShellSent);
        for name in ["hero", "promotions", "flash-deals"] {
            timing.mark_section_start(name);
            timing.mark_section_sent(name);
        }
        timing.mark(Mark::Complete);

        assert!(timing.time_to_shell() <= timing.time_to_first_section());
        assert_eq!(timing.sent_order(), ["hero", "promotions", "flash-deals"]);
    }
}
