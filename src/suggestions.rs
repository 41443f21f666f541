//! Remediation suggestions derived from a validation result

use crate::domain::{Priority, Suggestion, SuggestionKind, ValidationResult};
use std::path::Path;

/// Shell command that activates the environment at `path`
pub fn activation_command(path: &Path) -> String {
    if cfg!(windows) {
        format!("{}\\Scripts\\activate", path.display())
    } else {
        format!("source {}/bin/activate", path.display())
    }
}

/// Build suggestions in a fixed order: activation, updates, security fixes
pub fn generate_suggestions(result: &ValidationResult) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if let Some(info) = result.venv_info.as_ref().filter(|i| !i.is_activated()) {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Config,
            description: "Activate virtual environment for development".to_string(),
            command: Some(activation_command(&info.path)),
            auto_fixable: false,
            priority: Priority::Medium,
        });
    }

    for dep in result.dependencies.iter().filter(|d| d.is_outdated()) {
        let Some(latest) = &dep.latest else {
            continue;
        };
        suggestions.push(Suggestion {
            kind: SuggestionKind::Update,
            description: format!("Update {} to version {}", dep.name, latest),
            command: Some(format!("pip install {}=={}", dep.name, latest)),
            auto_fixable: true,
            priority: Priority::High,
        });
    }

    if let Some(security) = &result.security {
        for vuln in &security.vulnerabilities {
            let fixed_in = vuln.fixed_in.as_deref().unwrap_or_default();
            suggestions.push(Suggestion {
                kind: SuggestionKind::Security,
                description: format!("Fix vulnerability {} in {}", vuln.id, vuln.package),
                command: Some(format!("pip install {}=={}", vuln.package, fixed_in)),
                auto_fixable: true,
                priority: Priority::High,
            });
        }
    }

    suggestions
}
