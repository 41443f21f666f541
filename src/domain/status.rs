//! Status enumerations shared across the report

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state outcome used for components and the overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Success,
    Warning,
    Error,
}

impl Status {
    /// Returns the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }

    /// Downgrades to warning unless the status is already an error
    pub fn degrade(self) -> Self {
        match self {
            Status::Error => Status::Error,
            _ => Status::Warning,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the validated environment is the one currently active in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Activated,
    NotActivated,
}

impl Activation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Activation::Activated => "activated",
            Activation::NotActivated => "not_activated",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural integrity of the environment directory
///
/// `venv::validate` fails with `InvalidEnvironment` instead of returning an
/// `Invalid` record, so `Invalid` only appears in reports read back from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integrity {
    Valid,
    Invalid,
}

impl Integrity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Integrity::Valid => "valid",
            Integrity::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vulnerability severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Remediation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default() {
        assert_eq!(Status::default(), Status::Success);
    }

    #[test]
    fn test_status_degrade() {
        assert_eq!(Status::Success.degrade(), Status::Warning);
        assert_eq!(Status::Warning.degrade(), Status::Warning);
        assert_eq!(Status::Error.degrade(), Status::Error);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&Status::Warning).unwrap(), "\"warning\"");
        assert_eq!(
            serde_json::to_string(&Activation::NotActivated).unwrap(),
            "\"not_activated\""
        );
        assert_eq!(serde_json::to_string(&Integrity::Invalid).unwrap(), "\"invalid\"");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Status::Error.to_string(), "error");
        assert_eq!(Activation::Activated.to_string(), "activated");
        assert_eq!(Integrity::Valid.to_string(), "valid");
    }
}
