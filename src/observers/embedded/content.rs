//! # ContentReporter — prints line text and failures
//!
//! ## Example output
//! ```text
//! Read line: first line of the file
//! Read line:
//! Error: cannot open 'missing.txt': No such file or directory (os error 2)
//! ```

use async_trait::async_trait;

use crate::events::StateEvent;
use crate::observers::Observe;

/// Content reporter for `Line` and `Failed`.
#[derive(Default)]
pub struct ContentReporter;

impl ContentReporter {
    /// Construct a new [`ContentReporter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Line printed for `event`, or `None` if this reporter ignores it.
    pub fn render(&self, event: &StateEvent) -> Option<String> {
        match event {
            StateEvent::Line(text) => Some(format!("Read line: {text}")),
            StateEvent::Failed(reason) => Some(format!("Error: {reason}")),
            StateEvent::Start | StateEvent::Ready | StateEvent::Done => None,
        }
    }
}

#[async_trait]
impl Observe for ContentReporter {
    async fn on_event(&self, event: &StateEvent) {
        if let Some(line) = self.render(event) {
            println!("{line}");
        }
    }

    fn name(&self) -> &'static str {
        "ContentReporter"
    }
}
