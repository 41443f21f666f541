//! Known-vulnerable release lookups

use crate::domain::Severity;

/// One advisory: a package release with a published vulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub id: &'static str,
    pub package: &'static str,
    /// Exact affected version
    pub version: &'static str,
    pub severity: Severity,
}

/// Source of vulnerability advisories
pub trait VulnerabilityFeed: Send + Sync {
    /// Advisories that apply to this package, whatever the version
    fn advisories(&self, package: &str) -> Vec<Advisory>;
}

static ADVISORIES: &[Advisory] = &[
    Advisory {
        id: "CVE-2023-32681",
        package: "requests",
        version: "2.28.2",
        severity: Severity::Medium,
    },
    Advisory {
        id: "CVE-2021-33503",
        package: "urllib3",
        version: "1.26.0",
        severity: Severity::Medium,
    },
];

/// Feed backed by a fixed table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticVulnerabilityFeed;

impl StaticVulnerabilityFeed {
    pub fn new() -> Self {
        Self
    }
}

impl VulnerabilityFeed for StaticVulnerabilityFeed {
    fn advisories(&self, package: &str) -> Vec<Advisory> {
        ADVISORIES
            .iter()
            .filter(|a| a.package.eq_ignore_ascii_case(package))
            .copied()
            .collect()
    }
}
