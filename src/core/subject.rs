//! # Subject: drives one read pass and notifies observers of every step.
//!
//! The [`Subject`] owns an [`ObserverSet`] and an [`OpenSource`]. Each call to
//! [`Subject::process`] walks a fixed state machine and awaits delivery of every
//! event to every attached observer before taking the next step.
//!
//! ## Pass flow
//! ```text
//! process(id)
//!   ├─► notify Start                       (before any I/O)
//!   ├─► opener.open(id)
//!   │       └─ Err ──► notify Failed(desc) ──► end
//!   ├─► notify Ready
//!   ├─► loop source.next_line()
//!   │       ├─ Ok(Some(text)) ──► notify Line(text)
//!   │       ├─ Ok(None)       ──► break
//!   │       └─ Err            ──► drop source, notify Failed(desc) ──► end
//!   └─► drop source, notify Done
//! ```
//!
//! ## Rules
//! - `Start` is always first and emitted exactly once
//! - exactly **one** terminal event (`Done` or `Failed`) per pass, always last
//! - I/O errors never escape `process`; they become `Failed` events
//! - nothing but the observer registry survives between passes
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use readwatch::{Config, Subject};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let subject = Subject::new(Config::default());
//!     #[cfg(feature = "reporters")]
//!     {
//!         subject.attach(Arc::new(readwatch::LifecycleReporter::new()));
//!         subject.attach(Arc::new(readwatch::ContentReporter::new()));
//!     }
//!
//!     // With reporters: prints "Initializing..." then "Error: cannot open ..."
//!     let summary = subject.process_with_summary("does-not-exist.fail").await;
//!     assert!(!summary.is_done());
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use tracing::debug;

use super::{builder::SubjectBuilder, Config};
use crate::{
    error::ReadError,
    events::StateEvent,
    observers::{Observe, ObserverSet},
    source::{FsOpener, OpenSource},
};

/// How a pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// `Done` was emitted.
    Done,
    /// `Failed` was emitted with this description.
    Failed(Arc<str>),
}

/// Result of one pass, returned alongside the notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    /// Number of `Line` events emitted.
    pub lines: u64,
    /// Terminal event of the pass.
    pub outcome: PassOutcome,
}

impl PassSummary {
    /// True if the pass ended with `Done`.
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.outcome, PassOutcome::Done)
    }
}

/// Producer of read-pass notifications.
pub struct Subject {
    cfg: Config,
    opener: Arc<dyn OpenSource>,
    observers: ObserverSet,
    /// Passes started so far (diagnostics only).
    passes: AtomicU64,
}

impl Subject {
    /// Creates a subject reading local files, with no observers attached.
    pub fn new(cfg: Config) -> Self {
        let opener: Arc<dyn OpenSource> = Arc::new(FsOpener::new(&cfg));
        Self::new_internal(cfg, opener, ObserverSet::default())
    }

    /// Returns a builder for a subject with initial observers or a custom opener.
    pub fn builder(cfg: Config) -> SubjectBuilder {
        SubjectBuilder::new(cfg)
    }

    pub(super) fn new_internal(
        cfg: Config,
        opener: Arc<dyn OpenSource>,
        observers: ObserverSet,
    ) -> Self {
        Self {
            cfg,
            opener,
            observers,
            passes: AtomicU64::new(0),
        }
    }

    /// Configuration this subject was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Attaches an observer; it receives every event produced from now on.
    pub fn attach(&self, observer: Arc<dyn Observe>) {
        self.observers.attach(observer);
    }

    /// Detaches the most recent registration of `observer`, if any.
    pub fn detach<O: Observe + ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.observers.detach(observer)
    }

    /// Number of registrations (duplicates counted).
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// True if no observer is attached.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Runs one read pass over `source_id`.
    ///
    /// Always completes normally; a failed read is reported only through the
    /// `Failed` event.
    pub async fn process(&self, source_id: &str) {
        self.process_with_summary(source_id).await;
    }

    /// Runs one read pass and also returns how it ended.
    pub async fn process_with_summary(&self, source_id: &str) -> PassSummary {
        let pass = self.passes.fetch_add(1, AtomicOrdering::Relaxed) + 1;
        debug!(pass, source = source_id, "read pass starting");

        self.notify(StateEvent::Start).await;

        let mut source = match self.opener.open(source_id).await {
            Ok(source) => source,
            Err(err) => return self.fail(pass, 0, err).await,
        };

        self.notify(StateEvent::Ready).await;

        let mut lines = 0u64;
        loop {
            match source.next_line().await {
                Ok(Some(text)) => {
                    lines += 1;
                    self.notify(StateEvent::line(text)).await;
                }
                Ok(None) => break,
                Err(err) => {
                    drop(source);
                    return self.fail(pass, lines, err).await;
                }
            }
        }
        drop(source);

        self.notify(StateEvent::Done).await;
        debug!(pass, lines, "read pass done");
        PassSummary {
            lines,
            outcome: PassOutcome::Done,
        }
    }

    /// Emits the terminal `Failed` event for `err`.
    async fn fail(&self, pass: u64, lines: u64, err: ReadError) -> PassSummary {
        debug!(
            pass,
            lines,
            source = err.source_id(),
            error = err.as_label(),
            detail = %err.as_message(),
            "read pass failed"
        );
        let reason: Arc<str> = err.to_string().into();
        self.notify(StateEvent::Failed(Arc::clone(&reason))).await;
        PassSummary {
            lines,
            outcome: PassOutcome::Failed(reason),
        }
    }

    #[inline]
    async fn notify(&self, event: StateEvent) {
        self.observers.emit(&event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LineSource;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::io;

    /// In-memory opener: `None` entries stand for a mid-read I/O failure.
    struct Scripted(Vec<Option<&'static str>>);

    struct ScriptedLines(VecDeque<Option<&'static str>>, u64);

    #[async_trait]
    impl LineSource for ScriptedLines {
        async fn next_line(&mut self) -> Result<Option<String>, ReadError> {
            match self.0.pop_front() {
                Some(Some(text)) => {
                    self.1 += 1;
                    Ok(Some(text.to_string()))
                }
                Some(None) => Err(ReadError::Read {
                    source_id: "scripted".into(),
                    line: self.1,
                    source: io::Error::other("device unplugged"),
                }),
                None => Ok(None),
            }
        }
    }

    #[async_trait]
    impl OpenSource for Scripted {
        async fn open(&self, _source_id: &str) -> Result<Box<dyn LineSource>, ReadError> {
            Ok(Box::new(ScriptedLines(self.0.iter().copied().collect(), 0)))
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<StateEvent>>);

    #[async_trait]
    impl Observe for Recorder {
        async fn on_event(&self, event: &StateEvent) {
            self.0.lock().push(event.clone());
        }
    }

    fn scripted(lines: Vec<Option<&'static str>>) -> (Subject, Arc<Recorder>) {
        let rec = Arc::new(Recorder::default());
        let subject = Subject::builder(Config::default())
            .with_opener(Arc::new(Scripted(lines)))
            .with_observers(vec![rec.clone() as Arc<dyn Observe>])
            .build();
        (subject, rec)
    }

    #[tokio::test]
    async fn test_success_sequence() {
        let (subject, rec) = scripted(vec![Some("alpha"), Some(""), Some("beta")]);
        let summary = subject.process_with_summary("mem").await;

        assert_eq!(
            *rec.0.lock(),
            vec![
                StateEvent::Start,
                StateEvent::Ready,
                StateEvent::line("alpha"),
                StateEvent::line(""),
                StateEvent::line("beta"),
                StateEvent::Done,
            ]
        );
        assert_eq!(summary.lines, 3);
        assert!(summary.is_done());
    }

    #[tokio::test]
    async fn test_mid_read_failure_has_no_done() {
        let (subject, rec) = scripted(vec![Some("one"), Some("two"), None, Some("never")]);
        let summary = subject.process_with_summary("mem").await;

        let events = rec.0.lock().clone();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[..4].to_vec(),
            vec![
                StateEvent::Start,
                StateEvent::Ready,
                StateEvent::line("one"),
                StateEvent::line("two"),
            ]
        );
        assert!(matches!(events[4], StateEvent::Failed(_)));
        assert_eq!(summary.lines, 2);
        assert!(!summary.is_done());
    }

    #[derive(Clone, Default)]
    struct LogBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_failure_log_names_source_and_detail() {
        let buf = LogBuf::default();
        let writer = buf.clone();
        let sub = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(sub);

        let (subject, _rec) = scripted(vec![Some("one"), None]);
        subject.process("mem").await;

        let logged = String::from_utf8_lossy(&buf.0.lock()).into_owned();
        assert!(logged.contains("read pass failed"), "log: {logged}");
        assert!(logged.contains("scripted"), "log: {logged}");
        assert!(logged.contains("read (after 1 lines): device unplugged"), "log: {logged}");
    }

    #[tokio::test]
    async fn test_failure_right_after_ready() {
        let (subject, rec) = scripted(vec![None]);
        subject.process("mem").await;

        let kinds: Vec<_> = rec.0.lock().iter().map(|e| e.as_label()).collect();
        assert_eq!(kinds, vec!["start", "ready", "failed"]);
    }

    #[tokio::test]
    async fn test_empty_source_is_start_ready_done() {
        let (subject, rec) = scripted(vec![]);
        subject.process("mem").await;
        assert_eq!(
            *rec.0.lock(),
            vec![StateEvent::Start, StateEvent::Ready, StateEvent::Done]
        );
    }

    #[tokio::test]
    async fn test_open_failure_reports_description() {
        let rec = Arc::new(Recorder::default());
        let subject = Subject::new(Config::default());
        subject.attach(rec.clone());

        let summary = subject
            .process_with_summary("/definitely/not/here.fail")
            .await;

        let events = rec.0.lock().clone();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], StateEvent::Start);
        let reason = events[1].payload().unwrap();
        assert!(reason.contains("/definitely/not/here.fail"));
        assert_eq!(summary.outcome, PassOutcome::Failed(reason.into()));
    }

    #[tokio::test]
    async fn test_detached_observer_stops_receiving() {
        let (subject, rec) = scripted(vec![Some("x")]);
        assert!(subject.detach(&rec));
        assert!(subject.is_empty());

        subject.process("mem").await;
        assert!(rec.0.lock().is_empty());
    }
}
