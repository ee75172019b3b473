//! The compare command.
//!
//! ## Pipeline (in order):
//! 1. Discover `*_results.txt` logs in the input directory
//! 2. Zero logs: warn and stop, nothing is written
//! 3. Open every log (all-or-nothing)
//! 4. Resolve and create the output location
//! 5. Run the row pipeline into the chosen report sink
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for `compare`:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The core engine uses only `tracing::debug!()`/`warn!()` for internal details.

use crate::discovery::discover_fingerprint_logs;
use crate::errors::path_io_error;
use crate::output::{is_fuzzing_input, resolve_output_path, ComparisonMode};
use crate::sources::SourceSet;
use fpdiff_core::errors::Result;
use fpdiff_core::report::{JsonReportSink, ReportSink, TextReportSink};
use fpdiff_core::{
    log_op_end, log_op_error, log_op_start, AlignmentPolicy, ComparisonEngine, ConsistencyStats,
    EngineOptions,
};
use fpdiff_core_types::schema::{
    FIELD_COMPARABLE_ROWS, FIELD_DIVERGENT_ROWS, FIELD_ROWS_SCANNED, FIELD_RUN_ID,
    FIELD_SOURCE_COUNT,
};
use fpdiff_core_types::RunId;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// How the alignment guard is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentSetting {
    /// Guard on iff the input path looks like a fuzzing directory
    #[default]
    Auto,
    On,
    Off,
}

impl AlignmentSetting {
    pub fn resolve(self, input_dir: &Path) -> AlignmentPolicy {
        let guarded = match self {
            AlignmentSetting::Auto => is_fuzzing_input(input_dir),
            AlignmentSetting::On => true,
            AlignmentSetting::Off => false,
        };
        if guarded {
            AlignmentPolicy::Guarded
        } else {
            AlignmentPolicy::Unguarded
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Everything one compare run needs.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub input_dir: PathBuf,
    pub output_base: PathBuf,
    pub mode: ComparisonMode,
    pub alignment: AlignmentSetting,
    /// Append the statistical summary to the report
    pub statistics: bool,
    pub format: ReportFormat,
}

impl CompareRequest {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_base: impl Into<PathBuf>,
        mode: ComparisonMode,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_base: output_base.into(),
            mode,
            alignment: AlignmentSetting::default(),
            statistics: false,
            format: ReportFormat::default(),
        }
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            alignment: self.alignment.resolve(&self.input_dir),
            statistics: self.statistics,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompareOutcome {
    /// The input directory held no fingerprint logs; no report was written.
    NoSources { input_dir: PathBuf },
    Completed {
        output_path: PathBuf,
        /// Logs compared, in source order
        sources: Vec<PathBuf>,
        rows_scanned: u64,
        stats: ConsistencyStats,
    },
}

/// Run one comparison end to end.
///
/// ## Errors
///
/// - `InputDirNotFound` / `InputDirUnreadable`: discovery failed
/// - `SourceOpen` / `SourceRead`: a log could not be read
/// - `OutputDir`: the output directory could not be created
/// - `ReportWrite` / `ReportSerialize`: the report could not be written
pub fn execute_compare(request: &CompareRequest) -> Result<CompareOutcome> {
    let run_id = RunId::new();
    log_op_start!(
        "compare",
        { FIELD_RUN_ID } = run_id.as_str(),
        input_dir = %request.input_dir.display(),
        mode = request.mode.as_str()
    );
    let start = std::time::Instant::now();

    let outcome = execute_compare_impl(request).map_err(|e| {
        log_op_error!(
            "compare",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            { FIELD_RUN_ID } = run_id.as_str()
        );
        e
    })?;

    match &outcome {
        CompareOutcome::NoSources { .. } => {
            log_op_end!(
                "compare",
                duration_ms = start.elapsed().as_millis() as u64,
                { FIELD_RUN_ID } = run_id.as_str(),
                { FIELD_SOURCE_COUNT } = 0u64
            );
        }
        CompareOutcome::Completed {
            sources,
            rows_scanned,
            stats,
            ..
        } => {
            log_op_end!(
                "compare",
                duration_ms = start.elapsed().as_millis() as u64,
                { FIELD_RUN_ID } = run_id.as_str(),
                { FIELD_SOURCE_COUNT } = sources.len() as u64,
                { FIELD_ROWS_SCANNED } = *rows_scanned,
                { FIELD_COMPARABLE_ROWS } = stats.comparable_rows,
                { FIELD_DIVERGENT_ROWS } = stats.divergent_rows
            );
        }
    }

    Ok(outcome)
}

fn execute_compare_impl(request: &CompareRequest) -> Result<CompareOutcome> {
    let paths = discover_fingerprint_logs(&request.input_dir)?;
    if paths.is_empty() {
        tracing::warn!(
            input_dir = %request.input_dir.display(),
            "no *_results.txt files found"
        );
        return Ok(CompareOutcome::NoSources {
            input_dir: request.input_dir.clone(),
        });
    }

    let sources = SourceSet::open(paths)?;
    let source_paths = sources.paths().to_vec();

    let output_path = resolve_output_path(
        &request.input_dir,
        &request.output_base,
        request.mode,
        request.format.extension(),
    )?;

    let options = request.engine_options();
    tracing::debug!(
        alignment = ?options.alignment,
        statistics = options.statistics,
        output = %output_path.display(),
        "starting comparison"
    );

    let file = File::create(&output_path)
        .map_err(|e| path_io_error("write_report", &output_path, e))?;
    let out = BufWriter::new(file);
    let mut sink: Box<dyn ReportSink> = match request.format {
        ReportFormat::Text => Box::new(TextReportSink::new(out)),
        ReportFormat::Json => Box::new(JsonReportSink::new(out)),
    };

    let mut scanner = sources.into_scanner();
    let summary = ComparisonEngine::new(options).run(&mut scanner, sink.as_mut())?;

    Ok(CompareOutcome::Completed {
        output_path,
        sources: source_paths,
        rows_scanned: summary.rows_scanned,
        stats: summary.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_setting_resolution() {
        let fuzz = Path::new("blackbox_test/fuzzing/result_different_system");
        let plain = Path::new("blackbox_test/ECP/result_different_system");
        assert_eq!(AlignmentSetting::Auto.resolve(fuzz), AlignmentPolicy::Guarded);
        assert_eq!(AlignmentSetting::Auto.resolve(plain), AlignmentPolicy::Unguarded);
        assert_eq!(AlignmentSetting::On.resolve(plain), AlignmentPolicy::Guarded);
        assert_eq!(AlignmentSetting::Off.resolve(fuzz), AlignmentPolicy::Unguarded);
    }

    #[test]
    fn test_request_defaults() {
        let req = CompareRequest::new("in", "out", ComparisonMode::Python);
        assert_eq!(req.alignment, AlignmentSetting::Auto);
        assert_eq!(req.format, ReportFormat::Text);
        assert!(!req.statistics);
        assert_eq!(req.format.extension(), "txt");
    }
}
