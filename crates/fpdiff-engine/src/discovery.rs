//! Fingerprint log discovery.

use fpdiff_core::errors::{FpDiffError, Result};
use std::path::{Path, PathBuf};

/// File name suffix every fingerprint log carries.
pub const LOG_SUFFIX: &str = "_results.txt";

fn is_fingerprint_log(name: &str) -> bool {
    !name.starts_with('.') && name.ends_with(LOG_SUFFIX)
}

/// List the fingerprint logs directly inside `dir`.
///
/// Only regular files named `*_results.txt` are returned; subdirectories are
/// not descended into. Paths are `dir` joined with the file name and come
/// back sorted, which fixes source order for the whole run.
///
/// # Errors
///
/// `InputDirNotFound` if `dir` is missing or not a directory,
/// `InputDirUnreadable` if it cannot be listed.
pub fn discover_fingerprint_logs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FpDiffError::InputDirNotFound {
            path: dir.display().to_string(),
        }
        .into());
    }

    let unreadable = |e: std::io::Error| FpDiffError::InputDirUnreadable {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut logs = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!(name = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };
        if !is_fingerprint_log(name) {
            continue;
        }
        let path = dir.join(name);
        if path.is_file() {
            logs.push(path);
        }
    }

    logs.sort();
    tracing::debug!(
        dir = %dir.display(),
        found = logs.len(),
        "discovered fingerprint logs"
    );
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_match() {
        assert!(is_fingerprint_log("linux_3.11_results.txt"));
        assert!(is_fingerprint_log("_results.txt"));
        assert!(!is_fingerprint_log("results.txt"));
        assert!(!is_fingerprint_log("linux_results.txt.bak"));
        assert!(!is_fingerprint_log(".hidden_results.txt"));
    }
}
