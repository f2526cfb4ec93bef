//! # Core observer trait
//!
//! `Observe` is the extension point for plugging handlers into a read pass.
//! The subject awaits every observer in attachment order before it advances, so
//! a handler sees each event of a pass exactly once and in pass order.
//!
//! ## Contract
//! - Handlers run one at a time; a slow handler delays the pass (no backpressure
//!   or buffering between the subject and its observers).
//! - A handler that panics is isolated: the panic is caught and logged, the
//!   remaining observers still receive the event, and the pass continues.
//! - Unmatched kinds should be ignored, not treated as errors.
//!
//! ## Example (skeleton)
//! ```rust
//! use readwatch::{Observe, StateEvent};
//! use async_trait::async_trait;
//!
//! struct LineCounter(std::sync::atomic::AtomicU64);
//!
//! #[async_trait]
//! impl Observe for LineCounter {
//!     async fn on_event(&self, ev: &StateEvent) {
//!         if let StateEvent::Line(_) = ev {
//!             self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!         }
//!     }
//!     fn name(&self) -> &'static str { "line-counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::StateEvent;

/// Contract for read-pass observers.
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Handle a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    async fn on_event(&self, event: &StateEvent);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
