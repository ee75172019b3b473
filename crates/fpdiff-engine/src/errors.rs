//! Error helpers for filesystem collaborators.

use fpdiff_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error tied to a path
pub fn path_io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    io_error(operation, err).with_path(path.display().to_string())
}
