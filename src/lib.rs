//! # readwatch
//!
//! **readwatch** is a small observable line reader.
//!
//! A [`Subject`] reads a line-oriented source and notifies every attached
//! observer of each state change of the read pass. Observers are independent:
//! the subject only knows them as [`Observe`] handles and never inspects what
//! they do.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!       caller
//!         │ attach(Arc<dyn Observe>) / detach(&Arc<_>)
//!         │ process(source_id).await
//!         ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Subject                                                     │
//! │  - OpenSource (FsOpener by default) ──► Box<dyn LineSource>  │
//! │  - ObserverSet (ordered registry, snapshot per event)        │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ StateEvent (one at a time, awaited)
//!                 ┌──────────────┼──────────────┐
//!                 ▼              ▼              ▼
//!          LifecycleReporter ContentReporter  custom ...
//! ```
//!
//! ### Pass lifecycle
//! ```text
//! Start ──► Ready ──► Line* ──► Done
//!   │         │         │
//!   └─────────┴─────────┴─────► Failed
//! ```
//! `Start` comes first, exactly once. Each pass ends with exactly one terminal
//! event. I/O errors are never returned from `process`; they arrive as `Failed`.
//!
//! ## Features
//! | Area          | Description                                              | Key types / traits                   |
//! |---------------|----------------------------------------------------------|--------------------------------------|
//! | **Events**    | Tagged pass events; the kind decides the payload.         | [`StateEvent`], [`StateKind`]        |
//! | **Observers** | Hook into a pass; ordered, synchronous, panic-isolated.   | [`Observe`], [`ObserverSet`]         |
//! | **Subject**   | Drives a pass over a source and notifies observers.      | [`Subject`], [`PassSummary`]         |
//! | **Sources**   | Pluggable line sources; local files by default.          | [`OpenSource`], [`LineSource`], [`FsOpener`] |
//! | **Errors**    | Typed open/read failures.                                | [`ReadError`]                        |
//! | **Configuration** | Read buffer and URI handling.                        | [`Config`]                           |
//!
//! ## Optional features
//! - `reporters` (default): exports [`LifecycleReporter`] and [`ContentReporter`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use parking_lot::Mutex;
//! use readwatch::{Config, Observe, StateEvent, Subject};
//!
//! #[derive(Default)]
//! struct Journal(Mutex<Vec<StateEvent>>);
//!
//! #[async_trait]
//! impl Observe for Journal {
//!     async fn on_event(&self, ev: &StateEvent) {
//!         self.0.lock().push(ev.clone());
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let journal = Arc::new(Journal::default());
//!     let subject = Subject::new(Config::default());
//!     subject.attach(journal.clone());
//!
//!     subject.process("no-such-file.fail").await;
//!
//!     let events = journal.0.lock();
//!     assert_eq!(events.len(), 2);
//!     assert_eq!(events[0], StateEvent::Start);
//!     assert!(events[1].is_terminal());
//! }
//! ```
mod core;
mod error;
mod events;
mod observers;
mod source;

// ---- Public re-exports ----

pub use crate::core::{Config, PassOutcome, PassSummary, Subject, SubjectBuilder};
pub use error::ReadError;
pub use events::{StateEvent, StateKind};
pub use observers::{Observe, ObserverSet};
pub use source::{FsOpener, LineSource, OpenSource};

// Built-in stdout reporters.
// Disable with: `--no-default-features`
#[cfg(feature = "reporters")]
pub use observers::{ContentReporter, LifecycleReporter};
