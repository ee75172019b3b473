//! Lock-step scanning across every open fingerprint log.
//!
//! Each step pulls exactly one line from every source that still has one.
//! Records on the same step share a 1-based row number and are compared as
//! a unit. Alignment is purely positional: if one producer skipped or added a
//! line, every later row of that source is off by one.

use crate::errors::{ExError, Result};
use crate::record::{FingerprintRecord, TestKey};
use crate::source::LineSource;
use std::collections::BTreeSet;
use std::io::BufRead;

/// All records found at one line position, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    number: u64,
    records: Vec<FingerprintRecord>,
}

impl Row {
    pub fn new(number: u64, records: Vec<FingerprintRecord>) -> Self {
        Self { number, records }
    }

    /// 1-based row number.
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn records(&self) -> &[FingerprintRecord] {
        &self.records
    }

    /// True when no source produced a parseable record on this row.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&FingerprintRecord> {
        self.records.first()
    }

    pub fn distinct_test_keys(&self) -> BTreeSet<&TestKey> {
        self.records.iter().map(|r| &r.test_key).collect()
    }

    pub fn distinct_fingerprints(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.fingerprint.as_str()).collect()
    }
}

/// Drives every [`LineSource`] one line per step until all are exhausted.
pub struct SynchronizedScanner<R> {
    sources: Vec<LineSource<R>>,
    next_row_number: u64,
}

impl<R: BufRead> SynchronizedScanner<R> {
    pub fn new(sources: Vec<LineSource<R>>) -> Self {
        Self {
            sources,
            next_row_number: 1,
        }
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Source ids in scan order.
    pub fn source_ids(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.source_id()).collect()
    }

    /// Number of rows handed out so far.
    pub fn rows_scanned(&self) -> u64 {
        self.next_row_number - 1
    }

    /// Advance every source by one line and assemble the row.
    ///
    /// Returns `Ok(None)` only once every source is exhausted on the same
    /// step. Sources that ran out earlier simply contribute nothing.
    ///
    /// # Errors
    ///
    /// Propagates a reader failure from any source, tagged with the row number.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        let number = self.next_row_number;
        let mut any_line = false;
        let mut records = Vec::with_capacity(self.sources.len());

        for source in &mut self.sources {
            let line = source
                .next_line()
                .map_err(|e: ExError| e.with_row_number(number))?;
            if let Some(line) = line {
                any_line = true;
                if let Some(record) = FingerprintRecord::from_line(source.source_id_handle(), &line)
                {
                    records.push(record);
                }
            }
        }

        if !any_line {
            return Ok(None);
        }

        self.next_row_number += 1;
        Ok(Some(Row::new(number, records)))
    }
}
