//! # Built-in reporters
//!
//! Small, self-contained observers that print a read pass to stdout. Each one
//! reacts to a disjoint subset of kinds and ignores the rest.
//!
//! - [`LifecycleReporter`]: `Start`, `Ready`, `Done`.
//! - [`ContentReporter`]: `Line`, `Failed`.

mod content;
mod lifecycle;

pub use content::ContentReporter;
pub use lifecycle::LifecycleReporter;
