//! Running the environment's own python and pip
//!
//! This module provides:
//! - Executable lookup inside a venv (POSIX and Windows layouts)
//! - The EnvironmentProbe trait, so validation can run against a mock
//! - SystemProbe, which spawns the real processes with a timeout

use crate::error::ProbeError;
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;
use tokio::process::Command;

/// Default timeout for a single subprocess
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const PYTHON_CANDIDATES: &[&str] = &[
    "bin/python",
    "bin/python3",
    "Scripts/python.exe",
    "Scripts/python3.exe",
];

const PIP_CANDIDATES: &[&str] = &["bin/pip", "bin/pip3", "Scripts/pip.exe", "Scripts/pip3.exe"];

static PYTHON_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Python\s+(\S+)").unwrap());

/// Queries an environment for versions and installed packages
#[async_trait]
pub trait EnvironmentProbe: Send + Sync {
    /// Interpreter version, e.g. `3.11.4`
    async fn python_version(&self, venv: &Path) -> Result<String, ProbeError>;

    /// pip version, e.g. `23.1.2`
    async fn pip_version(&self, venv: &Path) -> Result<String, ProbeError>;

    /// Raw `pip list --format=freeze` output
    async fn freeze(&self, venv: &Path) -> Result<String, ProbeError>;
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    let has_exec_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "exe" | "bat" | "cmd"))
        .unwrap_or(false);
    has_exec_ext && path.is_file()
}

fn first_executable(venv: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|c| venv.join(c))
        .find(|p| is_executable(p))
}

/// Locate the interpreter inside a venv
pub fn find_python(venv: &Path) -> Option<PathBuf> {
    first_executable(venv, PYTHON_CANDIDATES)
}

/// How pip is invoked: a program plus leading arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipCommand {
    pub program: PathBuf,
    pub prefix_args: Vec<&'static str>,
}

/// Locate pip inside a venv, falling back to `python -m pip`
pub fn find_pip(venv: &Path) -> Option<PipCommand> {
    if let Some(pip) = first_executable(venv, PIP_CANDIDATES) {
        return Some(PipCommand {
            program: pip,
            prefix_args: Vec::new(),
        });
    }

    find_python(venv).map(|python| PipCommand {
        program: python,
        prefix_args: vec!["-m", "pip"],
    })
}

/// Extract the version from `python --version` output
pub fn parse_python_version(output: &str) -> String {
    let trimmed = output.trim();
    PYTHON_VERSION_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Extract the version from `pip --version` output
///
/// The format is `pip 23.1.2 from /path (python 3.11)`.
pub fn parse_pip_version(output: &str) -> String {
    output
        .split_whitespace()
        .nth(1)
        .unwrap_or("unknown")
        .to_string()
}

/// Probe that spawns real processes
#[derive(Debug, Clone)]
pub struct SystemProbe {
    timeout: Duration,
}

impl SystemProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run a command and return its combined stdout and stderr
    async fn run(&self, program: &Path, args: &[&str]) -> Result<String, ProbeError> {
        let label = std::iter::once(
            program
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| program.display().to_string()),
        )
        .chain(args.iter().map(|a| a.to_string()))
        .collect::<Vec<_>>()
        .join(" ");

        tracing::debug!("running {}", label);

        let mut command = Command::new(program);
        command.args(args).kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => return Err(ProbeError::timeout(label, self.timeout)),
            Ok(Err(e)) => return Err(ProbeError::invocation(label, e.to_string())),
            Ok(Ok(output)) => output,
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let detail = stderr.trim();
            let message = if detail.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, detail)
            };
            return Err(ProbeError::invocation(label, message));
        }

        Ok(format!("{}{}", stdout, stderr))
    }

    async fn run_pip(&self, venv: &Path, args: &[&str]) -> Result<String, ProbeError> {
        let pip = find_pip(venv).ok_or_else(|| ProbeError::not_found("pip"))?;
        let full_args: Vec<&str> = pip
            .prefix_args
            .iter()
            .copied()
            .chain(args.iter().copied())
            .collect();
        self.run(&pip.program, &full_args).await
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl EnvironmentProbe for SystemProbe {
    async fn python_version(&self, venv: &Path) -> Result<String, ProbeError> {
        let python = find_python(venv).ok_or_else(|| ProbeError::not_found("Python"))?;
        let output = self.run(&python, &["--version"]).await?;
        Ok(parse_python_version(&output))
    }

    async fn pip_version(&self, venv: &Path) -> Result<String, ProbeError> {
        let output = self.run_pip(venv, &["--version"]).await?;
        Ok(parse_pip_version(&output))
    }

    async fn freeze(&self, venv: &Path) -> Result<String, ProbeError> {
        self.run_pip(venv, &["list", "--format=freeze"]).await
    }
}
