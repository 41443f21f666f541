//! Core domain models for enva
//!
//! This module contains the types a validation run produces:
//! - Status enumerations for components and the final verdict
//! - Environment, dependency and requirement records
//! - Security and performance findings
//! - The aggregate result with issues and suggestions

mod dependency;
mod environment;
mod performance;
mod result;
mod security;
mod status;

pub use dependency::{Dependency, DependencyStatus, Requirement};
pub use environment::EnvironmentInfo;
pub use performance::{Impact, Optimization, OptimizationKind, PackageSize, Performance};
pub use result::{
    Issue, IssueKind, IssueSeverity, Suggestion, SuggestionKind, ValidationResult,
};
pub use security::{SecurityScan, Vulnerability};
pub use status::{Activation, Integrity, Priority, Severity, Status};
