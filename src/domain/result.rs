//! Aggregate validation result and its diagnostic records

use super::{
    Dependency, EnvironmentInfo, Performance, Priority, Requirement, SecurityScan, Status,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Area a diagnostic issue belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Venv,
    Dependency,
    Requirements,
    Security,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

/// A non-fatal problem encountered during validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

impl Issue {
    pub fn new(kind: IssueKind, severity: IssueSeverity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            component: None,
        }
    }

    /// Creates a warning-level issue
    pub fn warning(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(kind, IssueSeverity::Warning, message)
    }

    /// Attaches the component (file or package) the issue refers to
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Update,
    Remove,
    Add,
    Fix,
    Config,
    Security,
}

/// A remediation step derived from the findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub description: String,
    /// Literal shell command that applies the fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub auto_fixable: bool,
    pub priority: Priority,
}

/// Everything one validation run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub overall_status: Status,
    pub score: u8,
    #[serde(rename = "duration_ms", with = "duration_millis")]
    pub duration: Duration,
    pub timestamp: DateTime<Utc>,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venv_info: Option<EnvironmentInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityScan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<Performance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<Requirement>,
}

impl ValidationResult {
    /// Creates an empty result with a perfect score
    pub fn new() -> Self {
        Self {
            overall_status: Status::Success,
            score: 100,
            duration: Duration::ZERO,
            timestamp: Utc::now(),
            issues: Vec::new(),
            suggestions: Vec::new(),
            venv_info: None,
            dependencies: Vec::new(),
            security: None,
            performance: None,
            requirements: Vec::new(),
        }
    }

    /// Number of dependencies with a newer known version
    pub fn outdated_count(&self) -> usize {
        self.dependencies.iter().filter(|d| d.is_outdated()).count()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
