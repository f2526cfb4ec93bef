//! # ObserverSet: ordered registry with synchronous fan-out
//!
//! [`ObserverSet`] keeps the observers attached to a subject and delivers each
//! [`StateEvent`] to all of them.
//!
//! ## Architecture
//! ```text
//! emit(event)
//!     │
//!     ├─► snapshot()  (lock, clone handles, unlock)
//!     │
//!     ├──► observer1.on_event().await
//!     │        └──► panic → caught, warn!, continue
//!     ├──► observer2.on_event().await
//!     └──► observerN.on_event().await
//! ```
//!
//! ## Rules
//! - **Attachment order**: observers are awaited one after another, in the order
//!   they were attached. Duplicates are delivered once per registration.
//! - **Synchronous**: `emit()` returns only after every observer finished.
//! - **Snapshot**: attach/detach calls made while an event is in flight (for
//!   example by an observer reacting to it) only affect later events.
//! - **Isolation**: a panicking observer doesn't affect the others.
//!
//! The lock is never held across an `.await`.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::Mutex;
use tracing::warn;

use crate::events::StateEvent;
use crate::observers::Observe;

/// Ordered, shared registry of observers.
#[derive(Default)]
pub struct ObserverSet {
    observers: Mutex<Vec<Arc<dyn Observe>>>,
}

impl ObserverSet {
    /// Creates a set holding `observers` in the given order.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observe>>) -> Self {
        Self {
            observers: Mutex::new(observers),
        }
    }

    /// Appends an observer. The same handle may be attached more than once.
    pub fn attach(&self, observer: Arc<dyn Observe>) {
        self.observers.lock().push(observer);
    }

    /// Removes the most recent registration of `observer`.
    ///
    /// Identity is the handle's allocation, so any clone of the attached `Arc`
    /// matches. Returns `false` (and does nothing) if it is not attached.
    pub fn detach<O: Observe + ?Sized>(&self, observer: &Arc<O>) -> bool {
        let target = Arc::as_ptr(observer) as *const ();
        let mut observers = self.observers.lock();
        match observers
            .iter()
            .rposition(|o| Arc::as_ptr(o) as *const () == target)
        {
            Some(pos) => {
                observers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Clones the current handles, in attachment order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn Observe>> {
        self.observers.lock().clone()
    }

    /// Delivers `event` to every observer attached when the call started.
    ///
    /// Returns the number of observers that panicked while handling it.
    pub async fn emit(&self, event: &StateEvent) -> usize {
        let snapshot = self.snapshot();
        let mut panicked = 0;

        for observer in &snapshot {
            let fut = observer.on_event(event);
            if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
                panicked += 1;
                let info = {
                    let any = &*panic_err;
                    if let Some(msg) = any.downcast_ref::<&'static str>() {
                        (*msg).to_string()
                    } else if let Some(msg) = any.downcast_ref::<String>() {
                        msg.clone()
                    } else {
                        "unknown panic".to_string()
                    }
                };
                warn!(
                    observer = observer.name(),
                    event = event.as_label(),
                    %info,
                    "observer panicked; continuing dispatch"
                );
            }
        }
        panicked
    }

    /// True if there are no observers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.lock().is_empty()
    }

    /// Number of registrations (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }
}
