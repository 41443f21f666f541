//! Dependency scanners
//!
//! - security: known-vulnerable releases
//! - performance: size and maintenance heuristics

pub mod performance;
pub mod security;

pub use performance::analyze;
pub use security::scan;
