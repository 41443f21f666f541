//! Virtual environment description

use super::{Activation, Integrity, Status};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the structure validator learned about an environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    /// Path as given on the command line or found by the locator
    pub path: PathBuf,
    /// Interpreter version, or `error: ...` when the probe failed
    pub python_version: String,
    /// pip version, or `error: ...` when the probe failed
    pub pip_version: String,
    pub activated: Activation,
    pub integrity: Integrity,
    pub status: Status,
}

impl EnvironmentInfo {
    /// Creates a structurally valid, not yet probed environment record
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            python_version: String::new(),
            pip_version: String::new(),
            activated: Activation::NotActivated,
            integrity: Integrity::Valid,
            status: Status::Success,
        }
    }

    /// Returns true if the environment is the active one
    pub fn is_activated(&self) -> bool {
        self.activated == Activation::Activated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_valid_success() {
        let info = EnvironmentInfo::new("/venv");
        assert_eq!(info.integrity, Integrity::Valid);
        assert_eq!(info.status, Status::Success);
        assert!(!info.is_activated());
    }
}
