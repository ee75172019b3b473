//! Scoped ownership of every open fingerprint log.

use fpdiff_core::errors::Result;
use fpdiff_core::{LineSource, SynchronizedScanner};
use fpdiff_core_types::schema::FIELD_SOURCE_ID;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// All sources of one run, opened together and released together.
///
/// Opening is all-or-nothing: if any file fails to open, the ones already
/// opened are dropped before the error is returned. Dropping the set (or
/// the scanner built from it) closes every file.
pub struct SourceSet {
    paths: Vec<PathBuf>,
    sources: Vec<LineSource<BufReader<File>>>,
}

impl SourceSet {
    /// # Errors
    ///
    /// `SourceOpen` for the first path that cannot be opened.
    pub fn open(paths: Vec<PathBuf>) -> Result<Self> {
        let sources = paths
            .iter()
            .map(|path| {
                let source = LineSource::open(path)?;
                tracing::debug!({ FIELD_SOURCE_ID } = %path.display(), "opened fingerprint log");
                Ok(source)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { paths, sources })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Hand the open sources to a scanner, preserving order.
    pub fn into_scanner(self) -> SynchronizedScanner<BufReader<File>> {
        SynchronizedScanner::new(self.sources)
    }
}
