//! Error facility for comparison runs.
//!
//! Only failures that stop a run live here. Record-level anomalies (blank
//! lines, unparseable lines, misaligned rows, invalid bytes) are handled in
//! the pipeline and never become errors.

use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Error kinds, each with a stable code for callers and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration / input
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context about where in the comparison the failure happened.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    source_id: Option<String>,
    row_number: Option<u64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            source_id: None,
            row_number: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add fingerprint log source context
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    /// Add row number context
    pub fn with_row_number(mut self, row_number: u64) -> Self {
        self.row_number = Some(row_number);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the source id context, if any
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Get the row number context, if any
    pub fn row_number(&self) -> Option<u64> {
        self.row_number
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source_id) = &self.source_id {
            write!(f, " (source: {})", source_id)?;
        }
        if let Some(row) = self.row_number {
            write!(f, " (row: {})", row)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures of a comparison run
///
/// These are the abnormal-operation failures only: anything that stops the
/// run from producing a report at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FpDiffError {
    /// Input directory does not exist or is not a directory
    #[error("Input directory not found: {path}")]
    InputDirNotFound { path: String },

    /// Input directory could not be listed
    #[error("Failed to list input directory {path}: {reason}")]
    InputDirUnreadable { path: String, reason: String },

    /// A discovered fingerprint log could not be opened
    #[error("Failed to open fingerprint log {path}: {reason}")]
    SourceOpen { path: String, reason: String },

    /// The underlying reader failed mid-stream
    #[error("Failed to read fingerprint log {source_id}: {reason}")]
    SourceRead { source_id: String, reason: String },

    /// Output directory could not be created
    #[error("Failed to create output directory {path}: {reason}")]
    OutputDir { path: String, reason: String },

    /// The report stream rejected a write
    #[error("Failed to write report: {reason}")]
    ReportWrite { reason: String },

    /// The structured report could not be serialized
    #[error("Failed to serialize report: {reason}")]
    ReportSerialize { reason: String },

    /// Unknown comparison mode string
    #[error("Invalid comparison mode '{mode}': expected 'python' or 'system'")]
    InvalidMode { mode: String },
}

impl From<FpDiffError> for ExError {
    fn from(err: FpDiffError) -> Self {
        let message = err.to_string();
        match err {
            FpDiffError::InputDirNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_op("discover_sources")
                .with_path(path)
                .with_message(message),

            FpDiffError::InputDirUnreadable { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("discover_sources")
                .with_path(path)
                .with_message(message),

            FpDiffError::SourceOpen { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("open_source")
                .with_path(path)
                .with_message(message),

            FpDiffError::SourceRead { source_id, .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_line")
                .with_source_id(source_id)
                .with_message(message),

            FpDiffError::OutputDir { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("resolve_output_path")
                .with_path(path)
                .with_message(message),

            FpDiffError::ReportWrite { .. } => ExError::new(ExErrorKind::Io)
                .with_op("write_report")
                .with_message(message),

            FpDiffError::ReportSerialize { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("write_report")
                .with_message(message),

            FpDiffError::InvalidMode { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_mode")
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for FpDiffError {
    fn from(err: serde_json::Error) -> Self {
        FpDiffError::ReportSerialize {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("read_line")
            .with_source_id("a_results.txt")
            .with_row_number(7)
            .with_message("disk went away");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_IO] in operation 'read_line': disk went away"));
        assert!(text.contains("(source: a_results.txt)"));
        assert!(text.contains("(row: 7)"));
    }

    #[test]
    fn test_context_none_by_default() {
        let err = ExError::new(ExErrorKind::Io);
        assert!(err.op().is_none());
        assert!(err.path().is_none());
        assert!(err.source_id().is_none());
        assert!(err.row_number().is_none());
        assert_eq!(err.message(), "");
        assert_eq!(err.to_string(), "[ERR_IO]");
    }
}
