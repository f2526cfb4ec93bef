//! # Source traits
//!
//! ```text
//! OpenSource::open(id) ──► Box<dyn LineSource>
//!                               │
//!                               ├─► next_line() → Ok(Some(text))  one line
//!                               ├─► next_line() → Ok(None)        end of source
//!                               └─► next_line() → Err(ReadError)  mid-read failure
//! ```
//!
//! Dropping the `LineSource` releases the underlying handle.

use async_trait::async_trait;

use crate::error::ReadError;

/// Line-oriented reader over one opened source.
#[async_trait]
pub trait LineSource: Send {
    /// Next line with its terminator stripped, `None` at end of source.
    async fn next_line(&mut self) -> Result<Option<String>, ReadError>;
}

/// Resolves a source identifier into a readable [`LineSource`].
#[async_trait]
pub trait OpenSource: Send + Sync + 'static {
    /// Opens `source_id`. Failure here means no line can be read at all.
    async fn open(&self, source_id: &str) -> Result<Box<dyn LineSource>, ReadError>;
}
