//! Known-vulnerability matching

use crate::advisory::{VersionOracle, VulnerabilityFeed, DEFAULT_FIXED_VERSION};
use crate::domain::{Dependency, SecurityScan, Status, Vulnerability};

/// Match dependencies against the vulnerability feed
///
/// A dependency matches an advisory when its stored version equals the
/// affected version, with or without an `==` prefix. The fix version comes
/// from the oracle, defaulting to [`DEFAULT_FIXED_VERSION`].
///
/// The status escalates to error only on critical or high findings. The
/// static feed only carries medium advisories, so with it the status never
/// goes past warning.
pub fn scan(
    dependencies: &[Dependency],
    feed: &dyn VulnerabilityFeed,
    oracle: &dyn VersionOracle,
) -> SecurityScan {
    let mut result = SecurityScan::default();

    for dep in dependencies {
        let installed = dep.version.strip_prefix("==").unwrap_or(&dep.version);

        for advisory in feed.advisories(&dep.name) {
            if installed != advisory.version {
                continue;
            }

            tracing::debug!("{} matches {}", dep, advisory.id);
            result.record(Vulnerability {
                id: advisory.id.to_string(),
                package: dep.name.clone(),
                version: dep.version.clone(),
                severity: advisory.severity,
                description: format!("Security vulnerability in {}", dep.name),
                fixed_in: Some(
                    oracle
                        .latest(&dep.name)
                        .unwrap_or(DEFAULT_FIXED_VERSION)
                        .to_string(),
                ),
            });
        }
    }

    if !result.vulnerabilities.is_empty() {
        result.status = if result.critical > 0 || result.high > 0 {
            Status::Error
        } else {
            Status::Warning
        };
    }

    result
}
