//! Performance heuristics results

use super::Status;
use serde::{Deserialize, Serialize};

/// Estimated footprint of a known large package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSize {
    pub name: String,
    /// Human-readable estimate such as `450MB+`
    pub size: String,
}

/// Expected payoff of an optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// Category of an optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationKind {
    Size,
    Cleanup,
    Quantity,
    Update,
}

/// A performance-related recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(rename = "type")]
    pub kind: OptimizationKind,
    pub description: String,
    pub impact: Impact,
}

impl Optimization {
    pub fn new(kind: OptimizationKind, description: impl Into<String>, impact: Impact) -> Self {
        Self {
            kind,
            description: description.into(),
            impact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Performance {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unused_packages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub large_packages: Vec<PackageSize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optimizations: Vec<Optimization>,
    pub status: Status,
}

impl Performance {
    /// Returns true if an optimization of the given kind was recorded
    pub fn has_optimization(&self, kind: OptimizationKind) -> bool {
        self.optimizations.iter().any(|o| o.kind == kind)
    }
}
