use std::sync::Arc;

use super::{subject::Subject, Config};
use crate::{
    observers::{Observe, ObserverSet},
    source::{FsOpener, OpenSource},
};

/// Builder for constructing a [`Subject`] with initial observers or a custom opener.
pub struct SubjectBuilder {
    cfg: Config,
    observers: Vec<Arc<dyn Observe>>,
    opener: Option<Arc<dyn OpenSource>>,
}

impl SubjectBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
            opener: None,
        }
    }

    /// Sets the initial observers, in attachment order.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Replaces the filesystem opener (in-memory sources, tests, remote stores).
    pub fn with_opener(mut self, opener: Arc<dyn OpenSource>) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Builds the subject.
    ///
    /// Without [`with_opener`](Self::with_opener) an [`FsOpener`] is derived from
    /// the configuration.
    pub fn build(self) -> Subject {
        let opener = self
            .opener
            .unwrap_or_else(|| Arc::new(FsOpener::new(&self.cfg)) as Arc<dyn OpenSource>);
        Subject::new_internal(self.cfg, opener, ObserverSet::new(self.observers))
    }
}
