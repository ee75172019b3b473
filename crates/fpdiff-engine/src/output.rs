//! Where reports go, and which comparison variant a directory calls for.

use fpdiff_core::errors::{FpDiffError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The environment axis the logs vary along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Same OS, different runtime versions
    Python,
    /// Same runtime version, different operating systems
    System,
}

impl ComparisonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Python => "python",
            ComparisonMode::System => "system",
        }
    }
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = FpDiffError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "python" => Ok(ComparisonMode::Python),
            "system" => Ok(ComparisonMode::System),
            other => Err(FpDiffError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// True when the input directory holds fuzzing logs.
///
/// Fuzzing producers filter inputs per environment, so their logs are the
/// ones known to drift out of lock-step.
pub fn is_fuzzing_input(input_dir: &Path) -> bool {
    input_dir
        .to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
        .contains("fuzzing")
}

/// Name of the test-suite directory that owns `input_dir`, e.g.
/// `blackbox_test/ECP/result_different_system` gives `ECP`.
fn module_name(input_dir: &Path) -> Option<&std::ffi::OsStr> {
    input_dir.parent().and_then(Path::file_name)
}

/// Build `output_base/<module>/hash_differences_<mode>.<extension>` and
/// create its directory.
///
/// An input directory without a parent writes straight into `output_base`.
///
/// # Errors
///
/// `OutputDir` if the directory cannot be created.
pub fn resolve_output_path(
    input_dir: &Path,
    output_base: &Path,
    mode: ComparisonMode,
    extension: &str,
) -> Result<PathBuf> {
    let output_dir = match module_name(input_dir) {
        Some(module) => output_base.join(module),
        None => output_base.to_path_buf(),
    };

    std::fs::create_dir_all(&output_dir).map_err(|e| FpDiffError::OutputDir {
        path: output_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(output_dir.join(format!("hash_differences_{}.{}", mode, extension)))
}
