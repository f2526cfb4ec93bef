//! Read-pass events.
//!
//! This module holds the event **data model** the subject emits while it walks
//! one read pass: [`StateEvent`] (the tagged value) and [`StateKind`] (its
//! payload-free classification).
//!
//! ## Quick reference
//! - **Publisher**: `Subject::process` (one pass, one linear sequence).
//! - **Consumers**: every observer attached to the subject, via `ObserverSet`.

mod event;

pub use event::{StateEvent, StateKind};
