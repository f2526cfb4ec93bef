//! # Observers of a read pass.
//!
//! This module provides the [`Observe`] trait, the [`ObserverSet`] registry that
//! fans events out to attached observers, and the built-in reporters.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Subject::process ── notify(StateEvent) ──► ObserverSet::emit
//!                                                   │
//!                                   ┌───────────────┼───────────────┐
//!                                   ▼               ▼               ▼
//!                          LifecycleReporter  ContentReporter    Custom ...
//!                            (await, 1st)       (await, 2nd)     (await, Nth)
//! ```
//!
//! ## Implementing custom observers
//! ```no_run
//! use readwatch::{Observe, StateEvent};
//! use async_trait::async_trait;
//!
//! struct FailureAlert;
//!
//! #[async_trait]
//! impl Observe for FailureAlert {
//!     async fn on_event(&self, event: &StateEvent) {
//!         if let StateEvent::Failed(reason) = event {
//!             eprintln!("read failed: {reason}");
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "reporters")]
mod embedded;
mod observe;
mod set;

#[cfg(feature = "reporters")]
pub use embedded::{ContentReporter, LifecycleReporter};
pub use observe::Observe;
pub use set::ObserverSet;
