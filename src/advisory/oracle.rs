//! Latest-version lookups

/// Answers "what is the newest release of this package?"
pub trait VersionOracle: Send + Sync {
    /// Latest known version, or None when the package is unknown
    fn latest(&self, package: &str) -> Option<&str>;
}

/// Built-in snapshot of PyPI releases
static LATEST_VERSIONS: &[(&str, &str)] = &[
    ("cryptography", "41.0.0"),
    ("django", "4.2.0"),
    ("flask", "2.3.3"),
    ("numpy", "1.24.3"),
    ("pandas", "2.0.3"),
    ("requests", "2.31.0"),
    ("tensorflow", "2.13.0"),
    ("urllib3", "2.0.4"),
];

/// Oracle backed by a fixed table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticVersionOracle;

impl StaticVersionOracle {
    pub fn new() -> Self {
        Self
    }
}

impl VersionOracle for StaticVersionOracle {
    fn latest(&self, package: &str) -> Option<&str> {
        LATEST_VERSIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(package))
            .map(|(_, version)| *version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_package() {
        let oracle = StaticVersionOracle::new();
        assert_eq!(oracle.latest("requests"), Some("2.31.0"));
        assert_eq!(oracle.latest("django"), Some("4.2.0"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let oracle = StaticVersionOracle::new();
        assert_eq!(oracle.latest("Django"), Some("4.2.0"));
    }

    #[test]
    fn test_unknown_package() {
        let oracle = StaticVersionOracle::new();
        assert_eq!(oracle.latest("leftpad"), None);
    }
}
