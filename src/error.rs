//! Error types raised by line sources.
//!
//! [`ReadError`] covers the two failures a read pass can hit: the source cannot be
//! opened at all, or it becomes unreadable mid-stream. The subject never returns
//! these to its caller; it turns them into a [`StateEvent::Failed`](crate::StateEvent::Failed)
//! carrying the error's display text.

use std::io;
use thiserror::Error;

/// # Errors produced while opening or reading a source.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ReadError {
    /// Source could not be opened.
    #[error("cannot open '{source_id}': {source}")]
    Open {
        /// Identifier the caller passed to `process`.
        source_id: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Source became unreadable after it was opened.
    #[error("read failed on '{source_id}' after {line} line(s): {source}")]
    Read {
        /// Identifier the caller passed to `process`.
        source_id: String,
        /// Number of lines successfully read before the failure.
        line: u64,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Identifier is a URI with a scheme the opener cannot resolve.
    #[error("unsupported source scheme in '{source_id}'")]
    UnsupportedScheme {
        /// Identifier the caller passed to `process`.
        source_id: String,
    },

    /// `file://` URI naming a host other than the local machine.
    #[error("'{source_id}' does not name a local file")]
    NonLocalUri {
        /// Identifier the caller passed to `process`.
        source_id: String,
    },
}

impl ReadError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use readwatch::ReadError;
    ///
    /// let err = ReadError::UnsupportedScheme { source_id: "http://x".into() };
    /// assert_eq!(err.as_label(), "source_unsupported_scheme");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ReadError::Open { .. } => "source_open_failed",
            ReadError::Read { .. } => "source_read_failed",
            ReadError::UnsupportedScheme { .. } => "source_unsupported_scheme",
            ReadError::NonLocalUri { .. } => "source_not_local",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ReadError::Open { source, .. } => format!("open: {source}"),
            ReadError::Read { line, source, .. } => format!("read (after {line} lines): {source}"),
            ReadError::UnsupportedScheme { source_id } => format!("scheme: {source_id}"),
            ReadError::NonLocalUri { source_id } => format!("host: {source_id}"),
        }
    }

    /// Identifier of the source that failed.
    pub fn source_id(&self) -> &str {
        match self {
            ReadError::Open { source_id, .. }
            | ReadError::Read { source_id, .. }
            | ReadError::UnsupportedScheme { source_id }
            | ReadError::NonLocalUri { source_id } => source_id,
        }
    }
}
