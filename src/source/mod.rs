//! Line sources: the collaborator a subject reads from.
//!
//! The subject never touches the filesystem itself. It asks an [`OpenSource`]
//! to resolve a source identifier, then pulls lines from the returned
//! [`LineSource`] until it signals end or error.
//!
//! ## Contents
//! - [`OpenSource`], [`LineSource`] the two seams
//! - [`FsOpener`] filesystem implementation (plain paths and `file://` URIs)

mod fs;
mod line_source;

pub use fs::FsOpener;
pub use line_source::{LineSource, OpenSource};
