//! Virtual environment detection
//!
//! Features:
//! - Marker-file validity check (POSIX and Windows layouts)
//! - Upward search for conventional venv directory names
//! - `VIRTUAL_ENV` fallback

use crate::error::VenvError;
use std::path::{Path, PathBuf};

/// Directory names searched in the start directory and each ancestor
pub const VENV_DIR_NAMES: &[&str] = &["venv", ".venv", "env", ".env"];

/// Files that identify a directory as a virtual environment
const MARKERS: &[&str] = &[
    "bin/python",
    "bin/activate",
    "pyvenv.cfg",
    "Scripts/python.exe",
    "Scripts/activate.bat",
];

/// Check whether `path` looks like a virtual environment
///
/// The directory must exist and contain at least one marker file.
pub fn is_valid(path: &Path) -> bool {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return false;
    }

    MARKERS.iter().any(|marker| path.join(marker).exists())
}

/// Find a virtual environment starting from `start`
///
/// Searches `start` and its ancestors for [`VENV_DIR_NAMES`], then falls back
/// to `active_env` (the `VIRTUAL_ENV` value) when it is itself valid.
pub fn locate(start: &Path, active_env: Option<&Path>) -> Result<PathBuf, VenvError> {
    for dir in start.ancestors() {
        for name in VENV_DIR_NAMES {
            let candidate = dir.join(name);
            if is_valid(&candidate) {
                tracing::debug!("found virtual environment at {}", candidate.display());
                return Ok(candidate);
            }
        }
    }

    if let Some(env) = active_env.filter(|p| is_valid(p)) {
        tracing::debug!("using VIRTUAL_ENV {}", env.display());
        return Ok(env.to_path_buf());
    }

    Err(VenvError::NotFound)
}
