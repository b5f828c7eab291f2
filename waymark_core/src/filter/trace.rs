//! Per-pattern diagnostics.
//!
//! A [`ViewPattern`](super::ViewPattern) can be given a [`TraceSink`] when it is
//! built. The matcher reports every decision it takes to that sink. Patterns
//! built without one pay nothing beyond an `Option` check.
//!
//! Two sinks ship with the crate:
//! - [`TracingSink`] forwards events to `tracing` at `TRACE` level.
//! - [`RecordingSink`] keeps the rendered events in memory.

use std::fmt;

use crate::alias::PMutex;

/// A single matcher decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// Emitted once when the pattern is constructed.
    Compiled { filter: &'a str, tokens: usize },
    /// A static token accepted a segment.
    StaticMatched { literal: &'a str, segment: &'a str },
    /// A static token rejected a segment.
    StaticMismatch { literal: &'a str, segment: &'a str },
    /// A variable took a segment, or an absent optional fell back to its default.
    Captured { name: &'a str, value: &'a str },
    /// An optional variable had no segment and no default.
    OptionalAbsent { name: &'a str },
    /// A static or required variable found no segment left.
    MissingSegment { token: String },
    /// Segments remained after the last token.
    LeftoverSegments { count: usize },
    /// Final outcome of a match call.
    Finished { path: &'a str, matched: bool },
}

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Compiled { filter, tokens } => {
                write!(f, "compiled {:?} into {} tokens", filter, tokens)
            }
            TraceEvent::StaticMatched { literal, segment } => {
                write!(f, "static {:?} matched {:?}", literal, segment)
            }
            TraceEvent::StaticMismatch { literal, segment } => {
                write!(f, "static {:?} rejected {:?}", literal, segment)
            }
            TraceEvent::Captured { name, value } => write!(f, "captured {} = {:?}", name, value),
            TraceEvent::OptionalAbsent { name } => write!(f, "optional {} absent", name),
            TraceEvent::MissingSegment { token } => write!(f, "no segment left for {}", token),
            TraceEvent::LeftoverSegments { count } => write!(f, "{} segments left over", count),
            TraceEvent::Finished { path, matched } => {
                write!(f, "{:?} {}", path, if *matched { "matched" } else { "did not match" })
            }
        }
    }
}

/// Receives matcher decisions. Must be shareable, matching runs on many threads.
pub trait TraceSink: Send + Sync {
    fn record(&self, filter: &str, event: &TraceEvent<'_>);
}

impl<F> TraceSink for F
where
    F: Fn(&str, &TraceEvent<'_>) + Send + Sync,
{
    fn record(&self, filter: &str, event: &TraceEvent<'_>) {
        self(filter, event)
    }
}

/// Forwards events to the `tracing` subscriber under the `waymark::filter` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, filter: &str, event: &TraceEvent<'_>) {
        tracing::trace!(target: "waymark::filter", filter = filter, "{}", event);
    }
}

/// Keeps every rendered event as `"<filter>: <event>"`.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: PMutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Take the recorded lines, leaving the sink empty
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl TraceSink for RecordingSink {
    fn record(&self, filter: &str, event: &TraceEvent<'_>) {
        self.lines.lock().push(format!("{}: {}", filter, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_renders_and_drains() {
        let sink = RecordingSink::new();
        sink.record("user/<name>", &TraceEvent::Captured { name: "name", value: "Alice" });
        sink.record("user/<name>", &TraceEvent::Finished { path: "user/Alice", matched: true });
        assert_eq!(
            sink.lines(),
            vec![
                "user/<name>: captured name = \"Alice\"".to_string(),
                "user/<name>: \"user/Alice\" matched".to_string(),
            ]
        );
        assert_eq!(sink.drain().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let seen = PMutex::new(0usize);
        let sink = |_: &str, _: &TraceEvent<'_>| *seen.lock() += 1;
        sink.record("x", &TraceEvent::LeftoverSegments { count: 2 });
        sink.record("x", &TraceEvent::OptionalAbsent { name: "page" });
        assert_eq!(*seen.lock(), 2);
    }
}
