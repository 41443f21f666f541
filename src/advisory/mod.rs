//! Package metadata sources
//!
//! This module provides:
//! - VersionOracle: latest released version per package
//! - VulnerabilityFeed: known-vulnerable releases per package
//!
//! Both ship with static tables; a network-backed source can implement the
//! same traits without touching the scanners.

mod feed;
mod oracle;

pub use feed::{Advisory, StaticVulnerabilityFeed, VulnerabilityFeed};
pub use oracle::{StaticVersionOracle, VersionOracle};

/// Version reported as the fix when the oracle does not know the package
pub const DEFAULT_FIXED_VERSION: &str = "1.0.0";
