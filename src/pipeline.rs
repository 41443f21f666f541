//! Validation pipeline
//!
//! This module provides:
//! - Workflow coordination: validate → enumerate → requirements → security →
//!   performance → suggestions → score
//! - Environment path resolution (explicit, detected, or `./venv`)
//! - Degradation of non-fatal failures into issues

use crate::advisory::{
    StaticVersionOracle, StaticVulnerabilityFeed, VersionOracle, VulnerabilityFeed,
};
use crate::cli::CliArgs;
use crate::domain::{Issue, IssueKind, ValidationResult};
use crate::error::AppError;
use crate::inventory::{
    find_project_root, load_requirements, parse_freeze, to_dependencies, to_requirements,
    MANIFEST_FILENAME,
};
use crate::progress::Progress;
use crate::scanner;
use crate::scoring::apply_score;
use crate::suggestions::generate_suggestions;
use crate::venv::{self, EnvironmentProbe, SystemProbe, DEFAULT_TIMEOUT};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Path validated when nothing was given and nothing was detected
pub const FALLBACK_VENV: &str = "./venv";

/// Settings for a validation run
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Value of `VIRTUAL_ENV`, if any
    pub active_env: Option<PathBuf>,
    /// Per-subprocess timeout
    pub timeout: Duration,
    /// Whether to show a spinner on stderr
    pub show_progress: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            active_env: None,
            timeout: DEFAULT_TIMEOUT,
            show_progress: false,
        }
    }
}

impl ValidatorConfig {
    /// Create configuration from CLI arguments and the process environment
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            active_env: std::env::var_os("VIRTUAL_ENV")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            timeout: args.timeout,
            show_progress: !args.quiet && !args.json,
        }
    }
}

/// Runs the validation stages in order
pub struct Validator {
    config: ValidatorConfig,
    probe: Box<dyn EnvironmentProbe>,
    oracle: Box<dyn VersionOracle>,
    feed: Box<dyn VulnerabilityFeed>,
}

impl Validator {
    /// Create a validator that spawns real processes and uses the static tables
    pub fn new(config: ValidatorConfig) -> Self {
        let probe = SystemProbe::new(config.timeout);
        Self::with_probe(config, probe)
    }

    /// Create a validator with a custom probe (for testing)
    pub fn with_probe(config: ValidatorConfig, probe: impl EnvironmentProbe + 'static) -> Self {
        Self {
            config,
            probe: Box::new(probe),
            oracle: Box::new(StaticVersionOracle::new()),
            feed: Box::new(StaticVulnerabilityFeed::new()),
        }
    }

    /// Replace the version and vulnerability sources
    pub fn with_sources(
        mut self,
        oracle: impl VersionOracle + 'static,
        feed: impl VulnerabilityFeed + 'static,
    ) -> Self {
        self.oracle = Box::new(oracle);
        self.feed = Box::new(feed);
        self
    }

    /// Decide which directory to validate
    ///
    /// An explicit non-empty path wins. Otherwise the locator searches from
    /// `cwd`; when it finds nothing, [`FALLBACK_VENV`] is used.
    pub fn resolve_path(&self, explicit: Option<&Path>, cwd: &Path) -> PathBuf {
        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            return path.to_path_buf();
        }

        match venv::locate(cwd, self.config.active_env.as_deref()) {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!("auto-detection failed ({}), using {}", e, FALLBACK_VENV);
                PathBuf::from(FALLBACK_VENV)
            }
        }
    }

    /// Run the validation workflow against `venv_path`
    ///
    /// Only an invalid environment structure aborts the run.
    pub async fn run(&self, venv_path: &Path) -> Result<ValidationResult, AppError> {
        let start = Instant::now();
        let mut progress = Progress::new(self.config.show_progress);
        let mut result = ValidationResult::new();

        // Step 1: Validate structure
        progress.stage("Validating environment structure...");
        let info = venv::validate(
            venv_path,
            self.probe.as_ref(),
            self.config.active_env.as_deref(),
        )
        .await?;
        tracing::debug!("environment status: {}", info.status);
        result.venv_info = Some(info);

        // Step 2: Enumerate installed packages
        progress.stage("Listing installed packages...");
        match self.probe.freeze(venv_path).await {
            Ok(output) => {
                let packages = parse_freeze(&output);
                tracing::debug!("{} installed packages", packages.len());
                result.dependencies = to_dependencies(&packages, self.oracle.as_ref());
            }
            Err(e) => {
                tracing::warn!("package enumeration failed: {}", e);
                result.issues.push(Issue::warning(
                    IssueKind::Dependency,
                    format!("Failed to get packages: {}", e),
                ));
            }
        }

        // Step 3: Declared requirements
        progress.stage("Reading requirements...");
        self.check_requirements(venv_path, &mut result);

        // Step 4: Security
        progress.stage("Scanning for vulnerabilities...");
        let security = scanner::scan(
            &result.dependencies,
            self.feed.as_ref(),
            self.oracle.as_ref(),
        );
        tracing::debug!("security status: {}", security.status);
        result.security = Some(security);

        // Step 5: Performance
        let performance = scanner::analyze(&result.dependencies);
        tracing::debug!("performance status: {}", performance.status);
        result.performance = Some(performance);

        progress.finish_and_clear();

        // Step 6: Suggestions, then the final score
        result.suggestions = generate_suggestions(&result);
        result.duration = start.elapsed();
        apply_score(&mut result);

        tracing::debug!(
            "score {} ({}) in {:?}",
            result.score,
            result.overall_status,
            result.duration
        );

        Ok(result)
    }

    /// Parse requirements.txt from the project root, if there is one
    ///
    /// The declared requirements are recorded as-is; they are not compared
    /// with the installed set.
    fn check_requirements(&self, venv_path: &Path, result: &mut ValidationResult) {
        let manifest = find_project_root(venv_path).join(MANIFEST_FILENAME);
        if !manifest.exists() {
            tracing::debug!("no manifest at {}", manifest.display());
            return;
        }

        match load_requirements(&manifest) {
            Ok(entries) => {
                tracing::debug!("{} declared requirements", entries.len());
                result.requirements = to_requirements(&entries);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                result.issues.push(
                    Issue::warning(IssueKind::Requirements, e.to_string())
                        .with_component(manifest.display().to_string()),
                );
            }
        }
    }
}
