//! Compare command
//!
//! Usage: fpdiff compare <INPUT_DIR> <OUTPUT_BASE> <MODE> [--alignment ..] [--stats] [--format ..]

use clap::{Args, ValueEnum};
use fpdiff_engine::{
    execute_compare, AlignmentSetting, CompareOutcome, CompareRequest, ComparisonMode,
    ReportFormat,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Logs differ by runtime version
    Python,
    /// Logs differ by operating system
    System,
}

impl From<ModeArg> for ComparisonMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Python => ComparisonMode::Python,
            ModeArg::System => ComparisonMode::System,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlignmentArg {
    /// Guard rows only when the input path contains "fuzzing"
    Auto,
    /// Always drop rows whose sources disagree on the test key
    On,
    /// Never check test keys; compare fingerprints only
    Off,
}

impl From<AlignmentArg> for AlignmentSetting {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Auto => AlignmentSetting::Auto,
            AlignmentArg::On => AlignmentSetting::On,
            AlignmentArg::Off => AlignmentSetting::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Directory holding the *_results.txt logs, e.g. blackbox_test/ECP/result_different_system
    pub input_dir: PathBuf,

    /// Base directory for reports, e.g. analysis_res/
    pub output_base: PathBuf,

    /// Which environment axis the logs vary along
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Alignment guard policy
    #[arg(long, value_enum, default_value = "auto")]
    pub alignment: AlignmentArg,

    /// Append the statistical summary to the report
    #[arg(long)]
    pub stats: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = CompareRequest {
        input_dir: args.input_dir,
        output_base: args.output_base,
        mode: args.mode.into(),
        alignment: args.alignment.into(),
        statistics: args.stats,
        format: args.format.into(),
    };

    match execute_compare(&request)? {
        CompareOutcome::NoSources { input_dir } => {
            println!(
                "[Warning] No *_results.txt files found in {}.",
                input_dir.display()
            );
        }
        CompareOutcome::Completed {
            output_path, stats, ..
        } => {
            if request.statistics {
                println!(
                    "[Statistics] Effective comparison {}, discovering Differences {}",
                    stats.comparable_rows, stats.divergent_rows
                );
            }
            println!(
                "[Done] Comparison complete. Results saved to {}",
                output_path.display()
            );
        }
    }

    Ok(())
}
