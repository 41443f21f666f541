//! Environment size heuristics

use crate::domain::{
    Dependency, Impact, Optimization, OptimizationKind, PackageSize, Performance, Status,
};

/// Packages known to be heavy, with a rough installed size
const LARGE_PACKAGES: &[(&str, &str)] = &[
    ("tensorflow", "450MB+"),
    ("torch", "450MB+"),
    ("opencv-python", "100MB+"),
];

/// More dependencies than this triggers the cleanup and quantity checks
pub const MANY_PACKAGES_THRESHOLD: usize = 20;

/// More outdated dependencies than this triggers the update check
pub const MANY_OUTDATED_THRESHOLD: usize = 5;

/// Stand-in entry until import analysis can tell which packages go unused
pub const UNUSED_PLACEHOLDER: &str = "example-unused-package";

/// Run the size heuristics over the installed dependencies
///
/// The checks are independent and additive: known large packages, a large
/// package count, and many outdated packages each append their own findings
/// and each one sets the status to warning.
pub fn analyze(dependencies: &[Dependency]) -> Performance {
    let mut perf = Performance::default();

    for (name, size) in LARGE_PACKAGES {
        if dependencies.iter().any(|d| d.name.eq_ignore_ascii_case(name)) {
            perf.large_packages.push(PackageSize {
                name: name.to_string(),
                size: size.to_string(),
            });
        }
    }

    if !perf.large_packages.is_empty() {
        perf.status = Status::Warning;
        perf.optimizations.push(Optimization::new(
            OptimizationKind::Size,
            "Large packages may slow down environment",
            Impact::Medium,
        ));
    }

    let count = dependencies.len();
    if count > MANY_PACKAGES_THRESHOLD {
        perf.status = Status::Warning;
        perf.unused_packages.push(UNUSED_PLACEHOLDER.to_string());
        perf.optimizations.push(Optimization::new(
            OptimizationKind::Cleanup,
            "Remove unused packages to reduce environment size",
            Impact::Medium,
        ));
        perf.optimizations.push(Optimization::new(
            OptimizationKind::Quantity,
            format!("Many packages ({}), consider streamlining", count),
            Impact::Low,
        ));
    }

    let outdated = dependencies.iter().filter(|d| d.is_outdated()).count();
    if outdated > MANY_OUTDATED_THRESHOLD {
        perf.status = Status::Warning;
        perf.optimizations.push(Optimization::new(
            OptimizationKind::Update,
            format!(
                "Update {} outdated packages for performance improvements",
                outdated
            ),
            Impact::High,
        ));
    }

    perf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Dependency> {
        (0..count)
            .map(|i| Dependency::new(format!("pkg{}", i), "1.0.0"))
            .collect()
    }

    #[test]
    fn test_small_clean_environment() {
        let perf = analyze(&numbered(3));
        assert_eq!(perf.status, Status::Success);
        assert!(perf.optimizations.is_empty());
        assert!(perf.large_packages.is_empty());
        assert!(perf.unused_packages.is_empty());
    }

    #[test]
    fn test_large_package_detected() {
        let deps = vec![
            Dependency::new("torch", "2.0.1"),
            Dependency::new("requests", "2.31.0"),
        ];
        let perf = analyze(&deps);
        assert_eq!(perf.status, Status::Warning);
        assert_eq!(perf.large_packages.len(), 1);
        assert_eq!(perf.large_packages[0].name, "torch");
        assert_eq!(perf.large_packages[0].size, "450MB+");
        assert!(perf.has_optimization(OptimizationKind::Size));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let perf = analyze(&numbered(MANY_PACKAGES_THRESHOLD));
        assert_eq!(perf.status, Status::Success);
        assert!(perf.unused_packages.is_empty());
    }

    #[test]
    fn test_many_packages() {
        let perf = analyze(&numbered(25));
        assert_eq!(perf.status, Status::Warning);
        assert_eq!(perf.unused_packages, vec![UNUSED_PLACEHOLDER]);
        assert!(perf.has_optimization(OptimizationKind::Cleanup));
        let quantity = perf
            .optimizations
            .iter()
            .find(|o| o.kind == OptimizationKind::Quantity)
            .unwrap();
        assert!(quantity.description.contains("25"));
    }

    #[test]
    fn test_many_outdated() {
        let deps: Vec<_> = (0..6)
            .map(|i| Dependency::new(format!("old{}", i), "1.0").outdated("2.0"))
            .collect();
        let perf = analyze(&deps);
        assert_eq!(perf.status, Status::Warning);
        let update = perf
            .optimizations
            .iter()
            .find(|o| o.kind == OptimizationKind::Update)
            .unwrap();
        assert_eq!(update.impact, Impact::High);
        assert!(update.description.contains("6 outdated"));
    }

    #[test]
    fn test_five_outdated_is_fine() {
        let deps: Vec<_> = (0..5)
            .map(|i| Dependency::new(format!("old{}", i), "1.0").outdated("2.0"))
            .collect();
        assert_eq!(analyze(&deps).status, Status::Success);
    }
}
