//! requirements.txt parsing
//!
//! Handles line formats:
//! - Exact: `pkg==1.2.3` → `==1.2.3`
//! - Minimum: `pkg>=1.0` → `>=1.0`
//! - Bare name: `pkg` → empty constraint
//!
//! Comments (`#`) and blank lines are ignored. Other operators are not
//! interpreted; such a line is kept whole as the package name.

use crate::domain::Requirement;
use crate::error::ManifestError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifest file name looked up in the project root
pub const MANIFEST_FILENAME: &str = "requirements.txt";

/// Files or directories that mark a project root
const PROJECT_MARKERS: &[&str] = &[
    "requirements.txt",
    "pyproject.toml",
    "setup.py",
    "Pipfile",
    ".git",
];

/// Parse manifest text into name → constraint
pub fn parse_requirements(content: &str) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((name, version)) = line.split_once("==") {
            result.insert(name.trim().to_string(), format!("=={}", version.trim()));
        } else if let Some((name, version)) = line.split_once(">=") {
            result.insert(name.trim().to_string(), format!(">={}", version.trim()));
        } else {
            result.insert(line.to_string(), String::new());
        }
    }

    result
}

/// Read and parse a manifest file
pub fn load_requirements(path: &Path) -> Result<BTreeMap<String, String>, ManifestError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    Ok(parse_requirements(&content))
}

/// Convert parsed entries into requirement records
pub fn to_requirements(entries: &BTreeMap<String, String>) -> Vec<Requirement> {
    entries
        .iter()
        .map(|(name, constraint)| Requirement::new(name, constraint))
        .collect()
}

/// Find the project that owns a virtual environment
///
/// Walks upward from the environment's parent until a directory holds one of
/// the project markers. Falls back to the environment's parent.
pub fn find_project_root(venv: &Path) -> PathBuf {
    let venv = std::path::absolute(venv).unwrap_or_else(|_| venv.to_path_buf());
    let parent = venv
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| venv.clone());

    parent
        .ancestors()
        .find(|dir| PROJECT_MARKERS.iter().any(|m| dir.join(m).exists()))
        .map(Path::to_path_buf)
        .unwrap_or(parent)
}
