//! Installed package enumeration from `pip list --format=freeze`

use crate::advisory::VersionOracle;
use crate::domain::Dependency;
use crate::versioning::is_older;
use std::collections::BTreeMap;

/// Parse freeze output into name → version
///
/// Each non-empty line is split at its first `==`. Lines without `==`
/// (editable installs, `name @ url` references) are skipped. A repeated name
/// overwrites the earlier entry.
pub fn parse_freeze(output: &str) -> BTreeMap<String, String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once("=="))
        .map(|(name, version)| (name.trim().to_string(), version.trim().to_string()))
        .collect()
}

/// Turn installed packages into dependency records
///
/// A package is outdated when the oracle knows a newer release.
pub fn to_dependencies(
    packages: &BTreeMap<String, String>,
    oracle: &dyn VersionOracle,
) -> Vec<Dependency> {
    packages
        .iter()
        .map(|(name, version)| {
            let dep = Dependency::new(name, version);
            match oracle.latest(name) {
                Some(latest) if is_older(version, latest) => dep.outdated(latest),
                _ => dep,
            }
        })
        .collect()
}
