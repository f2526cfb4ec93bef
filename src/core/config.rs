//! # Subject configuration.
//!
//! Provides [`Config`], the settings a [`Subject`](crate::Subject) and its default
//! [`FsOpener`](crate::FsOpener) are built from.
//!
//! ## Sentinel values
//! - `read_buffer = 0` → clamped to 1 byte by [`Config::read_buffer_clamped`]

/// Settings for a subject and its filesystem opener.
///
/// ## Field semantics
/// - `read_buffer`: capacity of the buffered reader wrapped around each opened file
/// - `accept_file_uri`: whether `file://` identifiers are resolved to paths
///
/// ## Notes
/// All fields are public. Prefer the helper accessors over repeating the
/// clamping logic.
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity (bytes) of the read buffer used per pass.
    ///
    /// Larger buffers mean fewer read syscalls on big files; the line protocol is
    /// the same either way.
    pub read_buffer: usize,

    /// Resolve `file://` identifiers to local paths.
    ///
    /// - `true`: `file:///tmp/a.txt` opens `/tmp/a.txt`
    /// - `false`: any identifier containing `://` fails to open
    pub accept_file_uri: bool,
}

impl Config {
    /// Returns the read buffer capacity clamped to a minimum of 1.
    #[inline]
    pub fn read_buffer_clamped(&self) -> usize {
        self.read_buffer.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `read_buffer = 8 KiB`
    /// - `accept_file_uri = true`
    fn default() -> Self {
        Self {
            read_buffer: 8 * 1024,
            accept_file_uri: true,
        }
    }
}
