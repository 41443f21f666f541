//! enva - Python virtual environment health validator library
//!
//! This library inspects a Python virtual environment and produces a scored
//! health report:
//! - Environment structure, interpreter and pip versions, activation
//! - Installed packages against known latest versions
//! - Known vulnerabilities in installed versions
//! - Package count and footprint heuristics

pub mod advisory;
pub mod cli;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod scanner;
pub mod scoring;
pub mod suggestions;
pub mod venv;
pub mod versioning;
