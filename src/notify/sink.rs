//! Delivery of completion events to the host.
//!
//! Delivery is fire-and-forget: a sink never reports failure back to the
//! engine. Sinks that can fail log the failure and move on.

use std::io::Write;

use tracing::warn;

use super::event::CompletionEvent;

/// Receives completion events.
pub trait CompletionSink {
    fn notify(&mut self, event: &CompletionEvent);
}

impl<F> CompletionSink for F
where
    F: FnMut(&CompletionEvent),
{
    fn notify(&mut self, event: &CompletionEvent) {
        self(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl CompletionSink for NullSink {
    fn notify(&mut self, _event: &CompletionEvent) {}
}

/// Keeps every event it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    events: Vec<CompletionEvent>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[CompletionEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain the collected events.
    pub fn take(&mut self) -> Vec<CompletionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl CompletionSink for CollectingSink {
    fn notify(&mut self, event: &CompletionEvent) {
        self.events.push(event.clone());
    }
}

/// Writes each event as one line of JSON.
#[derive(Debug)]
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &CompletionEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> CompletionSink for JsonLineSink<W> {
    fn notify(&mut self, event: &CompletionEvent) {
        if let Err(e) = self.write_event(event) {
            warn!(error = %e, activity_id = %event.activity_id, "failed to write completion event");
        }
    }
}

/// Broadcasts to the direct host context and, when embedded, to the
/// enclosing context one level up.
#[derive(Clone, Debug, Default)]
pub struct HostRelay<D, P> {
    direct: D,
    parent: Option<P>,
}

impl<D: CompletionSink, P: CompletionSink> HostRelay<D, P> {
    /// Relay for a top-level host with no enclosing context.
    pub fn new(direct: D) -> Self {
        Self {
            direct,
            parent: None,
        }
    }

    /// Relay for an embedded host.
    pub fn embedded(direct: D, parent: P) -> Self {
        Self {
            direct,
            parent: Some(parent),
        }
    }

    pub fn direct(&self) -> &D {
        &self.direct
    }

    pub fn parent(&self) -> Option<&P> {
        self.parent.as_ref()
    }
}

impl<D: CompletionSink, P: CompletionSink> CompletionSink for HostRelay<D, P> {
    fn notify(&mut self, event: &CompletionEvent) {
        self.direct.notify(event);
        if let Some(parent) = self.parent.as_mut() {
            parent.notify(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_collecting_sink() {
        let mut sink = CollectingSink::new();
        sink.notify(&CompletionEvent::finished("a", 10));
        sink.notify(&CompletionEvent::finished("a", 20));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[1].score, 20);

        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut scores = Vec::new();
        {
            let mut sink = |event: &CompletionEvent| scores.push(event.score);
            sink.notify(&CompletionEvent::finished("a", 55));
        }
        assert_eq!(scores, vec![55]);
    }

    #[test]
    fn test_json_line_sink() {
        let mut sink = JsonLineSink::new(Vec::new());
        sink.notify(&CompletionEvent::finished("quiz", 80));
        sink.notify(&CompletionEvent::finished("quiz", 90));

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: CompletionEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, CompletionEvent::finished("quiz", 80));
    }

    #[test]
    fn test_json_line_sink_swallows_io_errors() {
        let mut sink = JsonLineSink::new(FailingWriter);
        sink.notify(&CompletionEvent::finished("quiz", 80));
    }

    #[test]
    fn test_relay_reaches_direct_and_parent() {
        let mut relay = HostRelay::embedded(CollectingSink::new(), CollectingSink::new());
        relay.notify(&CompletionEvent::finished("quiz", 64));

        assert_eq!(relay.direct().len(), 1);
        assert_eq!(relay.parent().map(CollectingSink::len), Some(1));
    }

    #[test]
    fn test_relay_top_level() {
        let mut relay: HostRelay<CollectingSink, NullSink> = HostRelay::new(CollectingSink::new());
        relay.notify(&CompletionEvent::finished("quiz", 64));

        assert_eq!(relay.direct().len(), 1);
        assert!(relay.parent().is_none());
    }
}
