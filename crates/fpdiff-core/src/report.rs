//! Report sinks.
//!
//! A sink receives difference entries in row order and is finished exactly
//! once. Statistics are passed to `finish` only when they were requested.

use crate::diff::human_summary::{render_difference_block, render_statistics};
use crate::diff::model::{ComparisonReport, DifferenceEntry};
use crate::errors::{FpDiffError, Result};
use crate::stats::ConsistencyStats;
use std::io::Write;

fn write_failed(err: std::io::Error) -> FpDiffError {
    FpDiffError::ReportWrite {
        reason: err.to_string(),
    }
}

pub trait ReportSink {
    /// Record one divergent row.
    ///
    /// # Errors
    ///
    /// `ReportWrite` if the underlying stream rejects the write.
    fn write_entry(&mut self, entry: &DifferenceEntry) -> Result<()>;

    /// Close the report, appending the summary if `stats` is present.
    ///
    /// # Errors
    ///
    /// `ReportWrite` or `ReportSerialize` if the report cannot be completed.
    fn finish(&mut self, stats: Option<&ConsistencyStats>) -> Result<()>;
}

/// Streams the text block format as entries arrive.
pub struct TextReportSink<W: Write> {
    out: W,
}

impl<W: Write> TextReportSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReportSink<W> {
    fn write_entry(&mut self, entry: &DifferenceEntry) -> Result<()> {
        self.out
            .write_all(render_difference_block(entry).as_bytes())
            .map_err(write_failed)?;
        Ok(())
    }

    fn finish(&mut self, stats: Option<&ConsistencyStats>) -> Result<()> {
        if let Some(stats) = stats {
            self.out
                .write_all(render_statistics(stats).as_bytes())
                .map_err(write_failed)?;
        }
        self.out.flush().map_err(write_failed)?;
        Ok(())
    }
}

/// Buffers entries and writes one pretty-printed [`ComparisonReport`] on finish.
pub struct JsonReportSink<W: Write> {
    out: W,
    report: ComparisonReport,
}

impl<W: Write> JsonReportSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: ComparisonReport::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn write_entry(&mut self, entry: &DifferenceEntry) -> Result<()> {
        self.report.entries.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self, stats: Option<&ConsistencyStats>) -> Result<()> {
        self.report.stats = stats.copied();
        serde_json::to_writer_pretty(&mut self.out, &self.report).map_err(FpDiffError::from)?;
        self.out.write_all(b"\n").map_err(write_failed)?;
        self.out.flush().map_err(write_failed)?;
        Ok(())
    }
}

/// Collects entries in memory; used where the caller wants the structured report.
#[derive(Debug, Default)]
pub struct MemoryReportSink {
    report: ComparisonReport,
    finished: bool,
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn report(&self) -> &ComparisonReport {
        &self.report
    }

    pub fn into_report(self) -> ComparisonReport {
        self.report
    }
}

impl ReportSink for MemoryReportSink {
    fn write_entry(&mut self, entry: &DifferenceEntry) -> Result<()> {
        self.report.entries.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self, stats: Option<&ConsistencyStats>) -> Result<()> {
        self.report.stats = stats.copied();
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::SourceFingerprint;
    use crate::errors::ExErrorKind;
    use crate::record::TestKey;

    fn entry(row: u64) -> DifferenceEntry {
        DifferenceEntry {
            row_number: row,
            test_key: TestKey::new("o", "p"),
            fingerprints: vec![
                SourceFingerprint {
                    source_id: "a".into(),
                    fingerprint: "1".into(),
                },
                SourceFingerprint {
                    source_id: "b".into(),
                    fingerprint: "2".into(),
                },
            ],
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_text_sink_streams_blocks_then_summary() {
        let mut sink = TextReportSink::new(Vec::new());
        sink.write_entry(&entry(2)).unwrap();
        sink.finish(Some(&ConsistencyStats {
            comparable_rows: 2,
            divergent_rows: 1,
        }))
        .unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("--- Difference at line 2 ---\n"));
        assert!(text.ends_with("Inconsistency rate: 50.00%\n"));
    }

    #[test]
    fn test_text_sink_without_stats_writes_no_summary() {
        let mut sink = TextReportSink::new(Vec::new());
        sink.finish(None).unwrap();
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_text_sink_write_error_is_io() {
        let mut sink = TextReportSink::new(BrokenPipe);
        let err = sink.write_entry(&entry(1)).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("write_report"));
    }

    #[test]
    fn test_json_sink_writes_single_document() {
        let mut sink = JsonReportSink::new(Vec::new());
        sink.write_entry(&entry(1)).unwrap();
        sink.write_entry(&entry(5)).unwrap();
        sink.finish(None).unwrap();
        let bytes = sink.into_inner();
        assert_eq!(bytes.last(), Some(&b'\n'));
        let report: ComparisonReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].row_number, 5);
        assert!(report.stats.is_none());
    }

    #[test]
    fn test_memory_sink_keeps_stats() {
        let mut sink = MemoryReportSink::new();
        sink.write_entry(&entry(1)).unwrap();
        let stats = ConsistencyStats {
            comparable_rows: 1,
            divergent_rows: 1,
        };
        sink.finish(Some(&stats)).unwrap();
        assert!(sink.is_finished());
        assert_eq!(sink.report().stats, Some(stats));
    }
}
