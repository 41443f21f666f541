//! Structural validation of a virtual environment

use super::locator::is_valid;
use super::probe::EnvironmentProbe;
use crate::domain::{Activation, EnvironmentInfo};
use crate::error::VenvError;
use std::path::{Component, Path, PathBuf};

/// Absolute form of `path` with `.` and `..` resolved lexically
///
/// Symlinks are not followed.
fn clean_absolute(path: &Path) -> Option<PathBuf> {
    let absolute = std::path::absolute(path).ok()?;
    let mut cleaned = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if cleaned.parent().is_some() {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other),
        }
    }

    Some(cleaned)
}

/// Returns true if `venv` is the environment named by `active_env`
///
/// Both paths are made absolute and cleaned before comparing.
pub fn is_activated(venv: &Path, active_env: Option<&Path>) -> bool {
    let Some(active) = active_env.filter(|p| !p.as_os_str().is_empty()) else {
        return false;
    };

    match (clean_absolute(venv), clean_absolute(active)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Validate the directory layout and query interpreter and pip versions
///
/// Fails only when the marker check fails. Probe failures downgrade the
/// status to warning and put the error text in place of the version.
pub async fn validate(
    path: &Path,
    probe: &dyn EnvironmentProbe,
    active_env: Option<&Path>,
) -> Result<EnvironmentInfo, VenvError> {
    if !is_valid(path) {
        tracing::debug!("no venv markers under {}", path.display());
        return Err(VenvError::invalid(path));
    }

    let mut info = EnvironmentInfo::new(path);

    match probe.python_version(path).await {
        Ok(version) => info.python_version = version,
        Err(e) => {
            tracing::warn!("python version probe failed: {}", e);
            info.status = info.status.degrade();
            info.python_version = format!("error: {}", e);
        }
    }

    match probe.pip_version(path).await {
        Ok(version) => info.pip_version = version,
        Err(e) => {
            tracing::warn!("pip version probe failed: {}", e);
            info.status = info.status.degrade();
            info.pip_version = format!("error: {}", e);
        }
    }

    if is_activated(path, active_env) {
        info.activated = Activation::Activated;
    } else {
        info.activated = Activation::NotActivated;
        info.status = info.status.degrade();
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Integrity, Status};
    use crate::error::ProbeError;
    use async_trait::async_trait;

    struct MockProbe {
        python: Option<&'static str>,
        pip: Option<&'static str>,
    }

    #[async_trait]
    impl EnvironmentProbe for MockProbe {
        async fn python_version(&self, _venv: &Path) -> Result<String, ProbeError> {
            self.python
                .map(str::to_string)
                .ok_or_else(|| ProbeError::not_found("Python"))
        }

        async fn pip_version(&self, _venv: &Path) -> Result<String, ProbeError> {
            self.pip
                .map(str::to_string)
                .ok_or_else(|| ProbeError::invocation("pip --version", "exit status: 1"))
        }

        async fn freeze(&self, _venv: &Path) -> Result<String, ProbeError> {
            Ok(String::new())
        }
    }

    fn healthy() -> MockProbe {
        MockProbe {
            python: Some("3.11.4"),
            pip: Some("23.1.2"),
        }
    }

    fn make_venv() -> tempfile::TempDir {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("pyvenv.cfg"), "").unwrap();
        temp
    }

    #[tokio::test]
    async fn test_validate_invalid_structure() {
        let temp = tempfile::tempdir().unwrap();
        let err = validate(temp.path(), &healthy(), None).await.unwrap_err();
        assert!(matches!(err, VenvError::InvalidEnvironment { .. }));
    }

    #[tokio::test]
    async fn test_validate_activated_success() {
        let temp = make_venv();
        let info = validate(temp.path(), &healthy(), Some(temp.path()))
            .await
            .unwrap();

        assert_eq!(info.python_version, "3.11.4");
        assert_eq!(info.pip_version, "23.1.2");
        assert_eq!(info.activated, Activation::Activated);
        assert_eq!(info.integrity, Integrity::Valid);
        assert_eq!(info.status, Status::Success);
    }

    #[tokio::test]
    async fn test_validate_not_activated_is_warning() {
        let temp = make_venv();
        let info = validate(temp.path(), &healthy(), None).await.unwrap();
        assert_eq!(info.activated, Activation::NotActivated);
        assert_eq!(info.status, Status::Warning);
    }

    #[tokio::test]
    async fn test_validate_probe_failures_degrade_to_warning() {
        let temp = make_venv();
        let probe = MockProbe {
            python: None,
            pip: None,
        };
        let info = validate(temp.path(), &probe, Some(temp.path()))
            .await
            .unwrap();

        assert_eq!(info.status, Status::Warning);
        assert!(info.python_version.starts_with("error: "));
        assert!(info.pip_version.contains("exit status: 1"));
        assert_eq!(info.integrity, Integrity::Valid);
    }

    #[test]
    fn test_is_activated_compares_absolute_paths() {
        let temp = tempfile::tempdir().unwrap();
        assert!(is_activated(temp.path(), Some(temp.path())));
        assert!(!is_activated(temp.path(), Some(&temp.path().join("other"))));
        assert!(!is_activated(temp.path(), None));
        assert!(!is_activated(temp.path(), Some(Path::new(""))));
    }

    #[test]
    fn test_is_activated_resolves_parent_components() {
        let temp = tempfile::tempdir().unwrap();
        let venv = temp.path().join("venv");

        assert!(is_activated(&temp.path().join("src/../venv"), Some(&venv)));
        assert!(is_activated(&venv, Some(&temp.path().join("./src/pkg/../../venv"))));
        assert!(!is_activated(&temp.path().join("src/venv/.."), Some(&venv)));
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_absolute() {
        assert_eq!(
            clean_absolute(Path::new("/a/b/../c/./d")),
            Some(PathBuf::from("/a/c/d"))
        );
        assert_eq!(clean_absolute(Path::new("/..")), Some(PathBuf::from("/")));
    }

    #[tokio::test]
    async fn test_validate_parent_relative_path_is_activated() {
        let temp = make_venv();
        let sub = temp.path().join("sub");
        std::fs::create_dir_all(&sub).unwrap();
        let roundabout = sub.join("..");

        let info = validate(&roundabout, &healthy(), Some(temp.path()))
            .await
            .unwrap();
        assert_eq!(info.activated, Activation::Activated);
        assert_eq!(info.status, Status::Success);
    }
}
