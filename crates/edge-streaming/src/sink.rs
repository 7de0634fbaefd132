//! Platform-controlled streaming sink.

use std::fmt::Display;

use edge_core::{LifecyclePhase, Mark, TimingContext, WorkloadError};
use futures::{Sink, SinkExt};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over the underlying `Sink<Vec<u8>>`, so the same page code writes
/// into Spin's `OutgoingBody` in production and into a `Vec` in previews.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark(Mark::ShellSent);
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        self.write(bytes).await
    }

    /// Flush and complete the response.
    pub async fn complete(&mut self) -> Result<(), WorkloadError> {
        if self.state == SinkState::Completed {
            return Err(WorkloadError::Completed);
        }
        self.inner
            .flush()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark(Mark::Complete);
        Ok(())
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written so far.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::Completed => Err(WorkloadError::Completed),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn vec_sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_section_before_shell_is_rejected() {
        let mut sink = vec_sink();
        let err = block_on(sink.send_section("hero", "<section></section>")).unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_shell_then_sections_in_order() {
        let mut sink = vec_sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
            sink.send_section("hero", "<hero>").await.unwrap();
            sink.send_section("newsletter", "<news>").await.unwrap();
            sink.send_raw(b"</html>".to_vec()).await.unwrap();
        });

        assert_eq!(sink.sections_sent(), ["hero", "newsletter"]);
        assert_eq!(
            sink.phase(),
            LifecyclePhase::SectionSent("newsletter".to_string())
        );
        assert!(sink.timing().section_timing("hero").is_some());
        assert_eq!(sink.timing().sent_order(), ["hero", "newsletter"]);
        assert_eq!(sink.bytes_sent(), "<html><hero><news></html>".len());

        let chunks = sink.into_inner();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[1], b"<hero>".to_vec());
    }

    #[test]
    fn test_shell_twice_and_write_after_complete_fail() {
        let mut sink = vec_sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert!(sink.send_shell("<html>").await.is_err());
            sink.complete().await.unwrap();
            assert!(matches!(
                sink.send_section("late", "x").await,
                Err(WorkloadError::Completed)
            ));
        });
        assert_eq!(sink.phase(), LifecyclePhase::Completion);
    }
}
