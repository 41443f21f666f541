//! Virtual environment discovery and validation
//!
//! This module provides:
//! - Locating a venv from the working directory or `VIRTUAL_ENV`
//! - Running the venv's python and pip through a mockable probe
//! - Structural validation producing an EnvironmentInfo

mod locator;
mod probe;
mod validator;

pub use locator::{is_valid, locate, VENV_DIR_NAMES};
pub use probe::{
    find_pip, find_python, parse_pip_version, parse_python_version, EnvironmentProbe, PipCommand,
    SystemProbe, DEFAULT_TIMEOUT,
};
pub use validator::{is_activated, validate};
