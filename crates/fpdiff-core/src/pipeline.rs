//! The row pipeline: scan, guard, detect, report.
//!
//! One engine covers every comparison variant. The alignment guard and the
//! statistics summary are independent switches on the same loop.

use crate::diff::detector::{detect, Verdict};
use crate::errors::Result;
use crate::guard::{Admission, AlignmentGuard, AlignmentPolicy};
use crate::report::ReportSink;
use crate::scanner::SynchronizedScanner;
use crate::stats::ConsistencyStats;
use fpdiff_core_types::schema::{
    FIELD_COMPARABLE_ROWS, FIELD_DIVERGENT_ROWS, FIELD_ROWS_SCANNED, FIELD_ROW_NUMBER,
    FIELD_SOURCE_COUNT,
};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub alignment: AlignmentPolicy,
    /// Hand the statistics summary to the sink when finishing.
    pub statistics: bool,
}

/// What a finished run saw.
///
/// `stats` is always populated, whether or not the summary went to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub source_count: usize,
    pub rows_scanned: u64,
    pub rows_misaligned: u64,
    pub stats: ConsistencyStats,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonEngine {
    options: EngineOptions,
}

impl ComparisonEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Drain `scanner` and write every divergent row to `sink`.
    ///
    /// With zero sources nothing is compared and the sink is left untouched.
    ///
    /// # Errors
    ///
    /// Reader failures from the scanner and write failures from the sink.
    /// Malformed lines and misaligned rows are never errors.
    pub fn run<R: BufRead>(
        &self,
        scanner: &mut SynchronizedScanner<R>,
        sink: &mut dyn ReportSink,
    ) -> Result<RunSummary> {
        let source_count = scanner.source_count();
        if source_count == 0 {
            tracing::warn!("no fingerprint logs to compare");
            return Ok(RunSummary::default());
        }

        let guard = AlignmentGuard::new(self.options.alignment);
        let mut summary = RunSummary {
            source_count,
            ..RunSummary::default()
        };

        while let Some(row) = scanner.next_row()? {
            summary.rows_scanned += 1;
            match guard.admit(&row) {
                Admission::Empty => continue,
                Admission::Misaligned { distinct_keys } => {
                    summary.rows_misaligned += 1;
                    tracing::debug!(
                        { FIELD_ROW_NUMBER } = row.number(),
                        distinct_keys,
                        "row dropped: sources disagree on test key"
                    );
                }
                Admission::Eligible => match detect(&row) {
                    Verdict::Consistent => summary.stats.record_consistent(),
                    Verdict::Divergent(entry) => {
                        summary.stats.record_divergent();
                        sink.write_entry(&entry)?;
                    }
                },
            }
        }

        let stats = self.options.statistics.then_some(&summary.stats);
        sink.finish(stats)?;

        tracing::debug!(
            { FIELD_SOURCE_COUNT } = summary.source_count,
            { FIELD_ROWS_SCANNED } = summary.rows_scanned,
            { FIELD_COMPARABLE_ROWS } = summary.stats.comparable_rows,
            { FIELD_DIVERGENT_ROWS } = summary.stats.divergent_rows,
            "comparison finished"
        );

        Ok(summary)
    }
}
