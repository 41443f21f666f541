//! Text output formatter for human-readable display
//!
//! Sections, in order: header, virtual environment, dependencies (when
//! any), security, summary.

use crate::domain::{
    Dependency, DependencyStatus, EnvironmentInfo, SecurityScan, Status, ValidationResult,
};
use crate::output::OutputFormatter;
use chrono::Local;
use colored::Colorize;
use std::io::Write;

const RULE: &str = "───────────────────────────────────────────";

fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✅",
        Status::Warning => "⚠️",
        Status::Error => "❌",
    }
}

fn dependency_icon(status: DependencyStatus) -> &'static str {
    match status {
        DependencyStatus::Uptodate => "✅",
        DependencyStatus::Outdated => "⚠️",
        DependencyStatus::Vulnerable | DependencyStatus::Missing => "❌",
    }
}

const INFO_ICON: &str = "ℹ️";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Section heading such as `[✅ VENV] Virtual Environment`
    fn heading(&self, status: Status, tag: &str, title: &str) -> String {
        let tag = format!("[{} {}]", status_icon(status), tag);
        if self.color {
            format!("{} {}", self.paint(&tag, status), title.bold())
        } else {
            format!("{} {}", tag, title)
        }
    }

    fn paint(&self, text: &str, status: Status) -> String {
        if !self.color {
            return text.to_string();
        }
        match status {
            Status::Success => text.green().bold().to_string(),
            Status::Warning => text.yellow().bold().to_string(),
            Status::Error => text.red().bold().to_string(),
        }
    }

    fn format_header(
        &self,
        result: &ValidationResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.heading(result.overall_status, "STATUS", "Environment Validation")
        )?;
        writeln!(writer, "{}", RULE)?;
        writeln!(
            writer,
            "Time: {} | Duration: {:.2}s",
            result.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            result.duration.as_secs_f64()
        )?;
        writeln!(writer)
    }

    fn format_venv(&self, info: &EnvironmentInfo, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.heading(info.status, "VENV", "Virtual Environment")
        )?;

        let version_icon = |v: &str| {
            if v.starts_with("error:") {
                status_icon(Status::Warning)
            } else {
                status_icon(Status::Success)
            }
        };
        let activation_icon = if info.is_activated() {
            status_icon(Status::Success)
        } else {
            status_icon(Status::Warning)
        };

        let path = info.path.display().to_string();
        let activated = info.activated.to_string();
        let integrity = info.integrity.to_string();
        let items: [(&str, &str, &str); 5] = [
            (INFO_ICON, "Path", &path),
            (version_icon(&info.python_version), "Python", &info.python_version),
            (version_icon(&info.pip_version), "Pip", &info.pip_version),
            (activation_icon, "Status", &activated),
            (status_icon(info.status), "Integrity", &integrity),
        ];

        for (icon, label, value) in items {
            writeln!(writer, "  {} {}: {}", icon, label, value)?;
        }

        writeln!(writer)
    }

    fn format_dependencies(
        &self,
        deps: &[Dependency],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let section_status = if deps.iter().any(|d| {
            matches!(
                d.status,
                DependencyStatus::Vulnerable | DependencyStatus::Missing
            )
        }) {
            Status::Error
        } else if deps.iter().any(|d| d.is_outdated()) {
            Status::Warning
        } else {
            Status::Success
        };

        writeln!(
            writer,
            "{}",
            self.heading(
                section_status,
                "PACKAGES",
                &format!("Dependencies ({})", deps.len())
            )
        )?;

        for dep in deps {
            let mut line = format!("  {} {}", dependency_icon(dep.status), dep.name);
            if !dep.version.is_empty() {
                line.push(' ');
                line.push_str(&dep.version);
            }
            if let Some(latest) = dep.latest.as_ref().filter(|l| **l != dep.version) {
                let suffix = format!(" → latest: {}", latest);
                if self.color {
                    line.push_str(&suffix.yellow().to_string());
                } else {
                    line.push_str(&suffix);
                }
            }
            writeln!(writer, "{}", line)?;
        }

        writeln!(writer)
    }

    fn format_security(
        &self,
        security: &SecurityScan,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.heading(security.status, "SECURITY", "Vulnerability Scan")
        )?;

        if security.critical > 0 || security.high > 0 {
            writeln!(writer, "  ❌ Critical: {}", security.critical)?;
            writeln!(writer, "  ❌ High: {}", security.high)?;
        }
        if security.medium > 0 {
            writeln!(writer, "  ⚠️  Medium: {}", security.medium)?;
        }
        if security.low > 0 {
            writeln!(writer, "  {}  Low: {}", INFO_ICON, security.low)?;
        }
        if security.total() == 0 {
            writeln!(writer, "  ✅ No known vulnerabilities")?;
        }

        if !security.vulnerabilities.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "  [ISSUES] Found:")?;
            for vuln in &security.vulnerabilities {
                writeln!(writer, "    • {} in {}", vuln.id, vuln.package)?;
                if let Some(fixed_in) = &vuln.fixed_in {
                    writeln!(writer, "      Fix: upgrade to {}", fixed_in)?;
                }
            }
        }

        writeln!(writer)
    }

    fn format_summary(
        &self,
        result: &ValidationResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let status = result.overall_status;
        writeln!(writer, "{}", self.heading(status, "SUMMARY", "Final Result"))?;

        let score = format!("{}/100", result.score);
        writeln!(writer, "  Score: {}", self.paint(&score, status))?;
        writeln!(writer, "  Status: {}", status.as_str().to_uppercase())?;
        writeln!(
            writer,
            "  Time: {:.2} seconds",
            result.duration.as_secs_f64()
        )?;
        writeln!(writer)?;

        let verdict = match status {
            Status::Success => "[✅ READY] Environment is production-ready",
            Status::Warning => "[⚠️  REVIEW] Environment has issues to address",
            Status::Error => "[❌ BLOCKED] Critical issues found",
        };
        writeln!(writer, "{}", self.paint(verdict, status))
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &ValidationResult, writer: &mut dyn Write) -> std::io::Result<()> {
        self.format_header(result, writer)?;

        if let Some(info) = &result.venv_info {
            self.format_venv(info, writer)?;
        }

        if !result.dependencies.is_empty() {
            self.format_dependencies(&result.dependencies, writer)?;
        }

        if let Some(security) = &result.security {
            self.format_security(security, writer)?;
        }

        self.format_summary(result, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activation, Severity, Vulnerability};
    use std::time::Duration;

    fn render(result: &ValidationResult) -> String {
        let mut output = Vec::new();
        TextFormatter::with_color(false)
            .format(result, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn create_test_result() -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut info = EnvironmentInfo::new("/proj/venv");
        info.python_version = "3.11.4".to_string();
        info.pip_version = "23.1.2".to_string();
        info.activated = Activation::Activated;
        result.venv_info = Some(info);
        result.dependencies = vec![
            Dependency::new("flask", "2.3.3"),
            Dependency::new("requests", "2.28.2").outdated("2.31.0"),
        ];

        let mut security = SecurityScan::default();
        security.record(Vulnerability {
            id: "CVE-2023-32681".to_string(),
            package: "requests".to_string(),
            version: "2.28.2".to_string(),
            severity: Severity::Medium,
            description: "Security vulnerability in requests".to_string(),
            fixed_in: Some("2.31.0".to_string()),
        });
        security.status = Status::Warning;
        result.security = Some(security);
        result.duration = Duration::from_millis(1250);
        result.score = 92;
        result
    }

    #[test]
    fn test_section_order() {
        let text = render(&create_test_result());
        let positions: Vec<usize> = ["STATUS]", "VENV]", "PACKAGES]", "SECURITY]", "SUMMARY]"]
            .iter()
            .map(|tag| text.find(tag).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_header() {
        let text = render(&create_test_result());
        assert!(text.starts_with("[✅ STATUS] Environment Validation\n"));
        assert!(text.contains("| Duration: 1.25s"));
    }

    #[test]
    fn test_venv_section() {
        let text = render(&create_test_result());
        assert!(text.contains("[✅ VENV] Virtual Environment"));
        assert!(text.contains("  ℹ️ Path: /proj/venv"));
        assert!(text.contains("  ✅ Python: 3.11.4"));
        assert!(text.contains("  ✅ Pip: 23.1.2"));
        assert!(text.contains("  ✅ Status: activated"));
        assert!(text.contains("  ✅ Integrity: valid"));
    }

    #[test]
    fn test_dependencies_section() {
        let text = render(&create_test_result());
        assert!(text.contains("[⚠️ PACKAGES] Dependencies (2)"));
        assert!(text.contains("  ✅ flask 2.3.3\n"));
        assert!(text.contains("  ⚠️ requests 2.28.2 → latest: 2.31.0\n"));
    }

    #[test]
    fn test_dependencies_section_omitted_when_empty() {
        let mut result = create_test_result();
        result.dependencies.clear();
        assert!(!render(&result).contains("PACKAGES]"));
    }

    #[test]
    fn test_security_section() {
        let text = render(&create_test_result());
        assert!(text.contains("[⚠️ SECURITY] Vulnerability Scan"));
        assert!(text.contains("  ⚠️  Medium: 1"));
        assert!(!text.contains("Critical:"));
        assert!(text.contains("    • CVE-2023-32681 in requests"));
        assert!(text.contains("      Fix: upgrade to 2.31.0"));
    }

    #[test]
    fn test_security_section_clean() {
        let mut result = create_test_result();
        result.security = Some(SecurityScan::default());
        let text = render(&result);
        assert!(text.contains("[✅ SECURITY] Vulnerability Scan"));
        assert!(text.contains("No known vulnerabilities"));
        assert!(!text.contains("[ISSUES]"));
    }

    #[test]
    fn test_summary_section() {
        let text = render(&create_test_result());
        assert!(text.contains("[✅ SUMMARY] Final Result"));
        assert!(text.contains("  Score: 92/100"));
        assert!(text.contains("  Status: SUCCESS"));
        assert!(text.contains("  Time: 1.25 seconds"));
        assert!(text.trim_end().ends_with("[✅ READY] Environment is production-ready"));
    }

    #[test]
    fn test_summary_verdicts() {
        let mut result = create_test_result();
        result.overall_status = Status::Warning;
        assert!(render(&result).contains("[⚠️  REVIEW] Environment has issues to address"));

        result.overall_status = Status::Error;
        let text = render(&result);
        assert!(text.contains("Status: ERROR"));
        assert!(text.contains("[❌ BLOCKED] Critical issues found"));
    }

    #[test]
    fn test_probe_error_gets_warning_icon() {
        let mut result = create_test_result();
        if let Some(info) = result.venv_info.as_mut() {
            info.python_version = "error: Python executable not found in venv".to_string();
        }
        assert!(render(&result).contains("  ⚠️ Python: error: Python executable not found"));
    }
}
