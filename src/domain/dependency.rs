//! Installed package and declared requirement records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Freshness of an installed package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    Uptodate,
    Outdated,
    Vulnerable,
    Missing,
}

/// Represents an installed Python package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Installed version (may carry a `==` prefix when it came from a manifest)
    pub version: String,
    /// Latest known version, set only when the package is outdated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    pub status: DependencyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_by: Option<String>,
}

impl Dependency {
    /// Creates an up-to-date dependency
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            latest: None,
            status: DependencyStatus::Uptodate,
            required_by: None,
        }
    }

    /// Marks this dependency as outdated relative to `latest` (builder pattern)
    pub fn outdated(mut self, latest: impl Into<String>) -> Self {
        self.latest = Some(latest.into());
        self.status = DependencyStatus::Outdated;
        self
    }

    /// Returns true if a newer version is known
    pub fn is_outdated(&self) -> bool {
        self.status == DependencyStatus::Outdated
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)
    }
}

/// A line from requirements.txt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    /// `==x`, `>=x`, or empty for a bare name
    pub constraint: String,
}

impl Requirement {
    pub fn new(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_new() {
        let dep = Dependency::new("flask", "2.3.3");
        assert_eq!(dep.name, "flask");
        assert_eq!(dep.status, DependencyStatus::Uptodate);
        assert!(dep.latest.is_none());
        assert!(!dep.is_outdated());
    }

    #[test]
    fn test_dependency_outdated() {
        let dep = Dependency::new("requests", "2.28.2").outdated("2.31.0");
        assert!(dep.is_outdated());
        assert_eq!(dep.latest.as_deref(), Some("2.31.0"));
    }

    #[test]
    fn test_dependency_display() {
        let dep = Dependency::new("numpy", "1.24.3");
        assert_eq!(dep.to_string(), "numpy==1.24.3");
    }

    #[test]
    fn test_serde_skips_empty_optionals() {
        let dep = Dependency::new("numpy", "1.24.3");
        let json = serde_json::to_value(&dep).unwrap();
        assert_eq!(json["status"], "uptodate");
        assert!(json.get("latest").is_none());
        assert!(json.get("required_by").is_none());
    }
}
