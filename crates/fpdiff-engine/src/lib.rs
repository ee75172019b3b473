//! fpdiff engine - collaborators and orchestration
//!
//! Everything the comparison engine deliberately leaves to its caller:
//! finding fingerprint logs on disk, owning the open files, deciding where
//! the report goes, and driving one comparison run end to end.

pub mod commands;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod sources;

pub use commands::compare::{
    execute_compare, AlignmentSetting, CompareOutcome, CompareRequest, ReportFormat,
};
pub use discovery::discover_fingerprint_logs;
pub use output::{is_fuzzing_input, resolve_output_path, ComparisonMode};
pub use sources::SourceSet;
