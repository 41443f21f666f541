//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VenvError: Locating or validating the virtual environment (fatal)
//! - ProbeError: Running the environment's interpreter or pip (degrades)
//! - ManifestError: Reading requirements.txt (aborts that stage only)
//! - ReportError: Rendering the report

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Virtual environment related errors
    #[error(transparent)]
    Venv(#[from] VenvError),

    /// Subprocess related errors
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Report rendering errors
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors related to locating and validating a virtual environment
#[derive(Error, Debug)]
pub enum VenvError {
    /// No candidate directory passed the validity check
    #[error("no virtual environment found")]
    NotFound,

    /// Directory is missing or carries none of the venv marker files
    #[error("venv validation failed: invalid virtual environment at {path}")]
    InvalidEnvironment { path: PathBuf },
}

/// Errors raised while invoking the environment's executables
#[derive(Error, Debug)]
pub enum ProbeError {
    /// No candidate executable exists inside the environment
    #[error("{tool} executable not found in venv")]
    ExecutableNotFound { tool: String },

    /// The process could not be spawned or exited unsuccessfully
    #[error("failed to run {command}: {message}")]
    InvocationError { command: String, message: String },

    /// The process did not finish in time
    #[error("{command} timed out after {}s", .timeout.as_secs())]
    Timeout { command: String, timeout: Duration },
}

/// Errors related to the requirements manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while rendering a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// JSON serialization failed
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VenvError {
    /// Creates a new InvalidEnvironment error
    pub fn invalid(path: impl Into<PathBuf>) -> Self {
        VenvError::InvalidEnvironment { path: path.into() }
    }
}

impl ProbeError {
    /// Creates a new ExecutableNotFound error
    pub fn not_found(tool: impl Into<String>) -> Self {
        ProbeError::ExecutableNotFound { tool: tool.into() }
    }

    /// Creates a new InvocationError
    pub fn invocation(command: impl Into<String>, message: impl Into<String>) -> Self {
        ProbeError::InvocationError {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(command: impl Into<String>, timeout: Duration) -> Self {
        ProbeError::Timeout {
            command: command.into(),
            timeout,
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venv_error_invalid() {
        let err = VenvError::invalid("/tmp/missing");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid virtual environment"));
        assert!(msg.contains("/tmp/missing"));
    }

    #[test]
    fn test_venv_error_not_found() {
        assert_eq!(VenvError::NotFound.to_string(), "no virtual environment found");
    }

    #[test]
    fn test_probe_error_not_found() {
        let err = ProbeError::not_found("pip");
        assert_eq!(err.to_string(), "pip executable not found in venv");
    }

    #[test]
    fn test_probe_error_invocation() {
        let err = ProbeError::invocation("pip --version", "exit status: 1");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to run pip --version"));
        assert!(msg.contains("exit status: 1"));
    }

    #[test]
    fn test_probe_error_timeout() {
        let err = ProbeError::timeout("python --version", Duration::from_secs(5));
        assert_eq!(err.to_string(), "python --version timed out after 5s");
    }

    #[test]
    fn test_manifest_error_read() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::read_error("/p/requirements.txt", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read manifest file"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_app_error_from_venv_error() {
        let app_err: AppError = VenvError::invalid("/x").into();
        assert!(format!("{}", app_err).contains("invalid virtual environment"));
    }

    #[test]
    fn test_app_error_from_probe_error() {
        let app_err: AppError = ProbeError::not_found("python").into();
        assert!(format!("{}", app_err).contains("python executable not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = VenvError::invalid("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidEnvironment"));
    }
}
