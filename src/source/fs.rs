//! # Filesystem line source.
//!
//! [`FsOpener`] resolves an identifier to a local file and reads it through a
//! buffered reader, one line at a time.
//!
//! ## Identifier forms
//! - plain path: `notes.txt`, `/var/log/app.log`
//! - file URI (when [`Config::accept_file_uri`] is set): `file:///var/log/app.log`,
//!   `file://localhost/var/log/app.log`, percent-encoded (`my%20notes.txt`)
//! - `file://` URI naming another host fails with [`ReadError::NonLocalUri`]
//! - any other `scheme://` prefix fails with [`ReadError::UnsupportedScheme`]
//!
//! A scheme is only recognised at the start of the identifier, so
//! `notes/a://b.txt` is a plain relative path.
//!
//! ## Line semantics
//! A line ends at `\n`, `\r` or `\r\n`; the terminator is stripped. A blank line
//! is an empty string. A final line without a terminator is still returned.
//! Bytes that are not valid UTF-8 are replaced with `U+FFFD`; only real I/O
//! errors surface as a read failure.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use crate::core::Config;
use crate::error::ReadError;
use crate::source::{LineSource, OpenSource};

/// Opens local files as line sources.
#[derive(Clone, Debug)]
pub struct FsOpener {
    read_buffer: usize,
    accept_file_uri: bool,
}

impl FsOpener {
    /// Creates an opener using the buffer size and URI handling from `cfg`.
    pub fn new(cfg: &Config) -> Self {
        Self {
            read_buffer: cfg.read_buffer_clamped(),
            accept_file_uri: cfg.accept_file_uri,
        }
    }

    /// Maps an identifier to a filesystem path.
    fn resolve(&self, source_id: &str) -> Result<PathBuf, ReadError> {
        if !has_scheme(source_id) {
            return Ok(PathBuf::from(source_id));
        }
        let unsupported = || ReadError::UnsupportedScheme {
            source_id: source_id.to_owned(),
        };
        if !self.accept_file_uri {
            return Err(unsupported());
        }
        let url = Url::parse(source_id).map_err(|_| unsupported())?;
        if url.scheme() != "file" {
            return Err(unsupported());
        }
        url.to_file_path().map_err(|()| ReadError::NonLocalUri {
            source_id: source_id.to_owned(),
        })
    }
}

/// True if `id` starts with `scheme://` (RFC 3986 scheme characters).
fn has_scheme(id: &str) -> bool {
    let Some((scheme, _)) = id.split_once("://") else {
        return false;
    };
    // Single letters are drive prefixes, not schemes.
    scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl Default for FsOpener {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[async_trait]
impl OpenSource for FsOpener {
    async fn open(&self, source_id: &str) -> Result<Box<dyn LineSource>, ReadError> {
        let path = self.resolve(source_id)?;
        let file = File::open(&path).await.map_err(|source| ReadError::Open {
            source_id: source_id.to_owned(),
            source,
        })?;

        Ok(Box::new(FileLines {
            source_id: source_id.to_owned(),
            reader: BufReader::with_capacity(self.read_buffer, file),
            skip_lf: false,
            read: 0,
        }))
    }
}

/// Open file plus the bookkeeping needed to split lines and describe a read failure.
struct FileLines {
    source_id: String,
    reader: BufReader<File>,
    /// Previous line ended with `\r`; a leading `\n` belongs to that terminator.
    skip_lf: bool,
    read: u64,
}

#[async_trait]
impl LineSource for FileLines {
    async fn next_line(&mut self) -> Result<Option<String>, ReadError> {
        let mut line = Vec::new();
        loop {
            let (terminated, used) = {
                let buf = match self.reader.fill_buf().await {
                    Ok(buf) => buf,
                    Err(source) => {
                        return Err(ReadError::Read {
                            source_id: self.source_id.clone(),
                            line: self.read,
                            source,
                        })
                    }
                };
                if buf.is_empty() {
                    self.skip_lf = false;
                    if line.is_empty() {
                        return Ok(None);
                    }
                    break;
                }

                let mut start = 0;
                if std::mem::take(&mut self.skip_lf) && buf[0] == b'\n' {
                    start = 1;
                }
                match buf[start..].iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(i) => {
                        line.extend_from_slice(&buf[start..start + i]);
                        self.skip_lf = buf[start + i] == b'\r';
                        (true, start + i + 1)
                    }
                    None => {
                        line.extend_from_slice(&buf[start..]);
                        (false, buf.len())
                    }
                }
            };
            self.reader.consume(used);
            if terminated {
                break;
            }
        }

        self.read += 1;
        let text = String::from_utf8(line)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    async fn drain(src: &mut Box<dyn LineSource>) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(line) = src.next_line().await.unwrap() {
            out.push(line);
        }
        out
    }

    async fn lines_of(bytes: &[u8], read_buffer: usize) -> Vec<String> {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        let cfg = Config {
            read_buffer,
            ..Config::default()
        };
        let mut src = FsOpener::new(&cfg)
            .open(f.path().to_str().unwrap())
            .await
            .unwrap();
        drain(&mut src).await
    }

    #[tokio::test]
    async fn test_strips_terminators_and_keeps_blank_lines() {
        let lines = lines_of(b"alpha\r\n\nbeta", 8 * 1024).await;
        assert_eq!(lines, vec!["alpha", "", "beta"]);
    }

    #[tokio::test]
    async fn test_lone_carriage_return_ends_a_line() {
        assert_eq!(lines_of(b"alpha\rbeta\r", 8 * 1024).await, vec!["alpha", "beta"]);
        assert_eq!(lines_of(b"a\r\rb", 8 * 1024).await, vec!["a", "", "b"]);
    }

    #[tokio::test]
    async fn test_crlf_split_across_buffer_refills() {
        let bytes = b"one\r\ntwo\r\n\r\nthree\rfour\n";
        let expected = vec!["one", "two", "", "three", "four"];
        for cap in [1, 2, 3, 4, 5] {
            assert_eq!(lines_of(bytes, cap).await, expected, "read_buffer={cap}");
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decoded_lossily() {
        let lines = lines_of(b"caf\xe9\nnext\n", 8 * 1024).await;
        assert_eq!(lines, vec!["caf\u{FFFD}", "next"]);
    }

    #[tokio::test]
    async fn test_file_uri_is_resolved() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "only").unwrap();

        let uri = Url::from_file_path(f.path()).unwrap().to_string();
        let mut src = FsOpener::default().open(&uri).await.unwrap();
        assert_eq!(drain(&mut src).await, vec!["only"]);
    }

    #[tokio::test]
    async fn test_percent_encoded_file_uri_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my file.txt");
        std::fs::write(&path, "spaced\n").unwrap();

        let uri = Url::from_file_path(&path).unwrap().to_string();
        assert!(uri.contains("my%20file.txt"), "uri: {uri}");
        let mut src = FsOpener::default().open(&uri).await.unwrap();
        assert_eq!(drain(&mut src).await, vec!["spaced"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_localhost_uri_maps_to_local_path() {
        let path = FsOpener::default()
            .resolve("file://localhost/var/log/app.log")
            .unwrap();
        assert_eq!(path, PathBuf::from("/var/log/app.log"));
    }

    // Windows maps foreign hosts to UNC paths instead of rejecting them.
    #[cfg(unix)]
    #[test]
    fn test_foreign_host_uri_is_rejected() {
        let err = FsOpener::default()
            .resolve("file://otherhost/tmp/data.txt")
            .unwrap_err();
        assert_eq!(err.as_label(), "source_not_local");
    }

    #[test]
    fn test_scheme_only_recognised_at_start() {
        let opener = FsOpener::default();
        assert_eq!(
            opener.resolve("notes/a://b.txt").unwrap(),
            PathBuf::from("notes/a://b.txt")
        );
        assert!(!has_scheme("C://data.txt"));
        assert!(has_scheme("svn+ssh://host/repo"));
    }

    #[test]
    fn test_file_uri_rejected_when_disabled() {
        let cfg = Config {
            accept_file_uri: false,
            ..Config::default()
        };
        let err = FsOpener::new(&cfg).resolve("file:///etc/hostname").unwrap_err();
        assert_eq!(err.as_label(), "source_unsupported_scheme");
    }

    #[tokio::test]
    async fn test_other_schemes_are_unsupported() {
        let err = FsOpener::default()
            .open("https://example.com/data.txt")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ReadError::UnsupportedScheme { .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.fail");
        let err = FsOpener::default()
            .open(missing.to_str().unwrap())
            .await
            .err()
            .unwrap();
        assert_eq!(err.as_label(), "source_open_failed");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut src = FsOpener::default()
            .open(dir.path().to_str().unwrap())
            .await
            .unwrap();
        match src.next_line().await {
            Err(ReadError::Read { line, .. }) => assert_eq!(line, 0),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
