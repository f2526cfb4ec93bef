//! Runtime core: the subject and its configuration.
//!
//! The public API from this module is [`Subject`] (with [`SubjectBuilder`]),
//! [`Config`], and the [`PassSummary`] returned by a pass.
//!
//! Internal modules:
//! - [`subject`]: runs a read pass and notifies observers step by step;
//! - [`builder`]: wires configuration, opener and initial observers;
//! - [`config`]: reader settings.

mod builder;
mod config;
mod subject;

pub use builder::SubjectBuilder;
pub use config::Config;
pub use subject::{PassOutcome, PassSummary, Subject};
