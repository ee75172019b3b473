//! fpdiff core - fingerprint differencing engine
//!
//! Compares fingerprint logs written independently by several execution
//! environments and reports every row where the environments disagree:
//! - Lazy, lossy line sources over each log
//! - Record parsing (`Object: .., Protocol: .., Hash: ..`)
//! - Lock-step row scanning across ragged sources
//! - Optional alignment guard for logs that may drift apart
//! - Difference detection, text/JSON report sinks and consistency statistics
//!
//! The crate never discovers or creates files on its own; callers hand it
//! open readers and an output stream.

pub mod diff;
pub mod errors;
pub mod guard;
pub mod logging_facility;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod scanner;
pub mod source;
pub mod stats;

pub use fpdiff_core_types;

// Re-export commonly used types
pub use diff::{ComparisonReport, DifferenceEntry, SourceFingerprint, Verdict};
pub use errors::{ExError, ExErrorKind, FpDiffError, Result};
pub use guard::{Admission, AlignmentGuard, AlignmentPolicy};
pub use pipeline::{ComparisonEngine, EngineOptions, RunSummary};
pub use record::{parse_record, FingerprintRecord, TestKey};
pub use report::{JsonReportSink, MemoryReportSink, ReportSink, TextReportSink};
pub use scanner::{Row, SynchronizedScanner};
pub use source::LineSource;
pub use stats::ConsistencyStats;
