//! Version string comparison
//!
//! Python versions are usually `MAJOR.MINOR[.PATCH]`. Those are padded and
//! compared as semver; anything else (four components, `rc1` suffixes, local
//! labels) falls back to comparing the numeric components in order.

use semver::Version;
use std::cmp::Ordering;

/// Strip a leading `==` or `v` and surrounding whitespace
fn bare(v: &str) -> &str {
    let v = v.trim();
    let v = v.strip_prefix("==").unwrap_or(v);
    v.strip_prefix('v').unwrap_or(v).trim()
}

/// Parse `1`, `1.2` or `1.2.3` into a semver version
fn to_semver(v: &str) -> Option<Version> {
    let parts: Vec<&str> = bare(v).split('.').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }
    if !parts
        .iter()
        .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    let mut numbers: Vec<u64> = parts.iter().filter_map(|p| p.parse().ok()).collect();
    numbers.resize(3, 0);
    Some(Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Compare two version strings
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    if let (Some(va), Some(vb)) = (to_semver(a), to_semver(b)) {
        return va.cmp(&vb);
    }

    let parse_parts = |s: &str| -> Vec<u64> {
        bare(s)
            .split(['.', '-'])
            .filter_map(|p| p.parse().ok())
            .collect()
    };

    let parts_a = parse_parts(a);
    let parts_b = parse_parts(b);

    for (pa, pb) in parts_a.iter().zip(parts_b.iter()) {
        match pa.cmp(pb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    // If all common parts are equal, the longer version is greater
    parts_a.len().cmp(&parts_b.len())
}

/// Returns true if `installed` is strictly older than `latest`
pub fn is_older(installed: &str, latest: &str) -> bool {
    compare_versions(installed, latest) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_versions_basic() {
        assert_eq!(compare_versions("1.0.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0.0", "2.0.0"), Ordering::Less);
        assert_eq!(compare_versions("2.0.0", "1.0.0"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_multi_digit() {
        assert_eq!(compare_versions("1.9.0", "1.10.0"), Ordering::Less);
        assert_eq!(compare_versions("10.0.0", "9.0.0"), Ordering::Greater);
        // a plain string comparison would get this one wrong
        assert!(is_older("2.4.0", "2.31.0"));
    }

    #[test]
    fn test_short_versions_are_padded() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("2", "1.9"), Ordering::Greater);
    }

    #[test]
    fn test_exact_prefix_is_ignored() {
        assert_eq!(compare_versions("==2.28.2", "2.28.2"), Ordering::Equal);
        assert!(is_older("==2.28.2", "2.31.0"));
    }

    #[test]
    fn test_non_semver_fallback() {
        assert_eq!(compare_versions("1.2.3.4", "1.2.3.5"), Ordering::Less);
        assert_eq!(compare_versions("2.0.0rc1", "2.0.1"), Ordering::Less);
    }

    #[test]
    fn test_is_older() {
        assert!(is_older("2.28.2", "2.31.0"));
        assert!(!is_older("2.31.0", "2.31.0"));
        assert!(!is_older("3.0.0", "2.31.0"));
    }
}
