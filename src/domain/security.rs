//! Vulnerability scan results

use super::{Severity, Status};
use serde::{Deserialize, Serialize};

/// A known vulnerability matched against an installed package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    /// Name of the affected dependency
    pub package: String,
    /// Version as stored on the dependency
    pub version: String,
    pub severity: Severity,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_in: Option<String>,
}

/// Aggregated vulnerability counts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecurityScan {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<Vulnerability>,
    pub status: Status,
}

impl SecurityScan {
    /// Records a vulnerability and bumps the matching severity counter
    pub fn record(&mut self, vulnerability: Vulnerability) {
        match vulnerability.severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
        self.vulnerabilities.push(vulnerability);
    }

    /// Total number of recorded vulnerabilities
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}
