//! # LifecycleReporter — prints pass status transitions
//!
//! ## Example output
//! ```text
//! Initializing...
//! Ready.
//! Done.
//! ```

use async_trait::async_trait;

use crate::events::StateEvent;
use crate::observers::Observe;

/// Status-line reporter for `Start`, `Ready` and `Done`.
#[derive(Default)]
pub struct LifecycleReporter;

impl LifecycleReporter {
    /// Construct a new [`LifecycleReporter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Line printed for `event`, or `None` if this reporter ignores it.
    pub fn render(&self, event: &StateEvent) -> Option<String> {
        match event {
            StateEvent::Start => Some("Initializing...".to_string()),
            StateEvent::Ready => Some("Ready.".to_string()),
            StateEvent::Done => Some("Done.".to_string()),
            StateEvent::Line(_) | StateEvent::Failed(_) => None,
        }
    }
}

#[async_trait]
impl Observe for LifecycleReporter {
    async fn on_event(&self, event: &StateEvent) {
        if let Some(line) = self.render(event) {
            println!("{line}");
        }
    }

    fn name(&self) -> &'static str {
        "LifecycleReporter"
    }
}
