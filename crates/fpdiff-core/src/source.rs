//! Lazy line reader over one fingerprint log.
//!
//! A [`LineSource`] hands out one line per call until the underlying stream
//! is exhausted. Bytes that are not valid UTF-8 are replaced with U+FFFD, so
//! a corrupt byte in one log never aborts the comparison.

use crate::errors::{FpDiffError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// One open fingerprint log.
pub struct LineSource<R> {
    source_id: Arc<str>,
    reader: R,
    buf: Vec<u8>,
    exhausted: bool,
}

impl LineSource<BufReader<File>> {
    /// Open the file at `path`; its display path becomes the source id.
    ///
    /// # Errors
    ///
    /// `SourceOpen` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FpDiffError::SourceOpen {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(path.display().to_string(), BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(source_id: impl Into<Arc<str>>, reader: R) -> Self {
        Self {
            source_id: source_id.into(),
            reader,
            buf: Vec::new(),
            exhausted: false,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Shared handle to the source id, cloned into every record this source yields.
    pub fn source_id_handle(&self) -> Arc<str> {
        Arc::clone(&self.source_id)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Read the next line without its terminator (`\n` or `\r\n`).
    ///
    /// Returns `Ok(None)` once the stream is exhausted, and keeps returning
    /// `Ok(None)` after that. A blank line is `Ok(Some(""))`, never `None`.
    ///
    /// # Errors
    ///
    /// `SourceRead` if the underlying reader fails. Invalid UTF-8 is not an error.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.exhausted {
            return Ok(None);
        }

        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| FpDiffError::SourceRead {
                source_id: self.source_id.to_string(),
                reason: e.to_string(),
            })?;

        if read == 0 {
            self.exhausted = true;
            return Ok(None);
        }

        let mut end = self.buf.len();
        if end > 0 && self.buf[end - 1] == b'\n' {
            end -= 1;
            if end > 0 && self.buf[end - 1] == b'\r' {
                end -= 1;
            }
        }

        Ok(Some(String::from_utf8_lossy(&self.buf[..end]).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(bytes: &[u8]) -> LineSource<Cursor<Vec<u8>>> {
        LineSource::new("mem", Cursor::new(bytes.to_vec()))
    }

    #[test]
    fn test_reads_lines_then_exhausts() {
        let mut src = source(b"first\nsecond\n");
        assert_eq!(src.next_line().unwrap().as_deref(), Some("first"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("second"));
        assert_eq!(src.next_line().unwrap(), None);
        assert!(src.is_exhausted());
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut src = source(b"only");
        assert_eq!(src.next_line().unwrap().as_deref(), Some("only"));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_exhaustion() {
        let mut src = source(b"\n\nlast\n");
        assert_eq!(src.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(src.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("last"));
        assert!(!src.is_exhausted());
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        let mut src = source(b"a\r\nb\r\n");
        assert_eq!(src.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut src = source(b"Hash: \xff\xfe ok\n");
        let line = src.next_line().unwrap().unwrap();
        assert_eq!(line, "Hash: \u{FFFD}\u{FFFD} ok");
    }

    #[test]
    fn test_empty_stream_exhausted_immediately() {
        let mut src = source(b"");
        assert_eq!(src.next_line().unwrap(), None);
        assert!(src.is_exhausted());
    }

    #[test]
    fn test_open_missing_file_is_source_open_error() {
        let err = LineSource::open(Path::new("/definitely/not/here_results.txt"))
            .err()
            .expect("open should fail");
        assert_eq!(err.kind(), crate::errors::ExErrorKind::Io);
        assert_eq!(err.op(), Some("open_source"));
    }
}
