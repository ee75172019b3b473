//! fpdiff CLI
//!
//! Command-line interface for comparing fingerprint logs across environments

use clap::{Parser, Subcommand, ValueEnum};
use fpdiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable log lines
    Pretty,
    /// One JSON object per log event
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fpdiff")]
#[command(about = "fpdiff - Cross-environment fingerprint log comparison", long_about = None)]
struct Cli {
    /// Diagnostic log format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, global = true, value_enum, env = "FPDIFF_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare every *_results.txt log in a directory
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
