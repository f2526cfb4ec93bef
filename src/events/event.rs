//! # State events emitted during a read pass.
//!
//! A pass always walks the same machine:
//! ```text
//! Start ──► Ready ──► Line* ──► Done
//!   │         │         │
//!   └─────────┴─────────┴─────► Failed
//! ```
//!
//! [`StateEvent`] is a sum type: the variant alone decides whether a payload
//! exists, so `Line` always carries the line text and `Failed` always carries the
//! failure description. The remaining variants carry nothing.
//!
//! ## Example
//! ```rust
//! use readwatch::{StateEvent, StateKind};
//!
//! let ev = StateEvent::line("alpha");
//! assert_eq!(ev.kind(), StateKind::Line);
//! assert_eq!(ev.payload(), Some("alpha"));
//! assert!(!ev.is_terminal());
//!
//! assert_eq!(StateEvent::Done.payload(), None);
//! assert!(StateEvent::Done.is_terminal());
//! ```

use std::fmt;
use std::sync::Arc;

/// Classification of read-pass events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Pass is starting; no I/O attempted yet.
    Start,
    /// Source opened and ready to be read.
    Ready,
    /// One line was read.
    Line,
    /// End of source reached without error. Terminal.
    Done,
    /// Source could not be opened or read. Terminal.
    Failed,
}

impl StateKind {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            StateKind::Start => "start",
            StateKind::Ready => "ready",
            StateKind::Line => "line",
            StateKind::Done => "done",
            StateKind::Failed => "failed",
        }
    }
}

/// One point in the lifecycle of a read pass.
///
/// Payloads are `Arc<str>` so the event is cheap to clone per observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Emitted first, exactly once per pass.
    Start,
    /// Emitted after the source opened successfully.
    Ready,
    /// Line text with its terminator stripped (may be empty).
    Line(Arc<str>),
    /// Terminal success event.
    Done,
    /// Terminal failure event with a human-readable description.
    Failed(Arc<str>),
}

impl StateEvent {
    /// Creates a `Line` event.
    #[inline]
    pub fn line(text: impl Into<Arc<str>>) -> Self {
        StateEvent::Line(text.into())
    }

    /// Creates a `Failed` event.
    #[inline]
    pub fn failed(description: impl Into<Arc<str>>) -> Self {
        StateEvent::Failed(description.into())
    }

    /// Payload-free classification of this event.
    #[inline]
    pub fn kind(&self) -> StateKind {
        match self {
            StateEvent::Start => StateKind::Start,
            StateEvent::Ready => StateKind::Ready,
            StateEvent::Line(_) => StateKind::Line,
            StateEvent::Done => StateKind::Done,
            StateEvent::Failed(_) => StateKind::Failed,
        }
    }

    /// Line text for `Line`, description for `Failed`, `None` otherwise.
    #[inline]
    pub fn payload(&self) -> Option<&str> {
        match self {
            StateEvent::Line(text) | StateEvent::Failed(text) => Some(text.as_ref()),
            StateEvent::Start | StateEvent::Ready | StateEvent::Done => None,
        }
    }

    /// True for `Done` and `Failed`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, StateEvent::Done | StateEvent::Failed(_))
    }

    /// Label of this event's kind; see [`StateKind::as_label`].
    #[inline]
    pub fn as_label(&self) -> &'static str {
        self.kind().as_label()
    }
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(p) => write!(f, "{}({p:?})", self.as_label()),
            None => f.write_str(self.as_label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_present_only_for_line_and_failed() {
        assert_eq!(StateEvent::Start.payload(), None);
        assert_eq!(StateEvent::Ready.payload(), None);
        assert_eq!(StateEvent::Done.payload(), None);
        assert_eq!(StateEvent::line("").payload(), Some(""));
        assert_eq!(StateEvent::failed("boom").payload(), Some("boom"));
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(StateEvent::Start.kind(), StateKind::Start);
        assert_eq!(StateEvent::Ready.kind(), StateKind::Ready);
        assert_eq!(StateEvent::line("x").kind(), StateKind::Line);
        assert_eq!(StateEvent::Done.kind(), StateKind::Done);
        assert_eq!(StateEvent::failed("x").kind(), StateKind::Failed);
    }

    #[test]
    fn test_terminal_events() {
        assert!(StateEvent::Done.is_terminal());
        assert!(StateEvent::failed("x").is_terminal());
        assert!(!StateEvent::Start.is_terminal());
        assert!(!StateEvent::Ready.is_terminal());
        assert!(!StateEvent::line("x").is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(StateEvent::Ready.to_string(), "ready");
        assert_eq!(StateEvent::line("a b").to_string(), "line(\"a b\")");
    }
}
