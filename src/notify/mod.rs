//! Completion notification.
//!
//! The engine emits exactly one `CompletionEvent` each time a session moves
//! from `Playing` to `Finished`. Where the event goes is up to the host: the
//! engine only holds a `CompletionSink` injected at construction.

pub mod event;
pub mod sink;

pub use event::{CompletionEvent, COMPLETION_KIND};
pub use sink::{CollectingSink, CompletionSink, HostRelay, JsonLineSink, NullSink};
