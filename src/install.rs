//! Run the package manager's install command inside the new project

use std::path::Path;
use std::process::Command;

use crate::error::{GenerateError, StageResult};

/// How the install command is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallRequest {
    /// `<pm> install`
    Plain,
    /// `<pm> install <libraries...>`, the user's text split on whitespace
    WithLibraries(String),
}

impl InstallRequest {
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        if let InstallRequest::WithLibraries(libraries) = self {
            args.extend(libraries.split_whitespace().map(str::to_string));
        }
        args
    }
}

/// Captured result of a successful install
#[derive(Debug, Clone, Default)]
pub struct InstallOutput {
    /// stdout followed by stderr
    pub combined: String,
}

/// Run `<package_manager> install [...]` with `project_dir` as working directory
///
/// A non-zero exit status is reported as [`GenerateError::Subprocess`] carrying
/// the captured error text.
pub fn run_install(
    package_manager: &str,
    project_dir: &Path,
    request: &InstallRequest,
) -> StageResult<InstallOutput> {
    let program = which::which(package_manager).map_err(|e| {
        GenerateError::Subprocess(format!("{package_manager} not found on PATH: {e}"))
    })?;
    let args = request.args();
    log::debug!(
        "running {} {} in {}",
        program.display(),
        args.join(" "),
        project_dir.display()
    );

    let output = Command::new(&program)
        .args(&args)
        .current_dir(project_dir)
        .output()
        .map_err(|e| {
            GenerateError::Subprocess(format!("failed to start {package_manager}: {e}"))
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        let message = if stderr.trim().is_empty() {
            format!("{package_manager} exited with {}", output.status)
        } else {
            stderr.trim().to_string()
        };
        return Err(GenerateError::Subprocess(message));
    }

    let mut combined = stdout.into_owned();
    if !stderr.trim().is_empty() {
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&stderr);
    }
    Ok(InstallOutput { combined })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_args() {
        assert_eq!(InstallRequest::Plain.args(), vec!["install"]);
    }

    #[test]
    fn test_library_args_appended_in_order() {
        let request = InstallRequest::WithLibraries("express@4  cors\t-D vitest".into());
        assert_eq!(request.args(), vec!["install", "express@4", "cors", "-D", "vitest"]);
    }

    #[test]
    fn test_missing_program_is_subprocess_error() {
        let dir = std::env::temp_dir();
        let err = run_install("nyrenx-no-such-package-manager", &dir, &InstallRequest::Plain)
            .unwrap_err();
        assert!(matches!(err, GenerateError::Subprocess(ref msg) if msg.contains("not found")));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn script(dir: &Path, body: &str) -> String {
            let path = dir.join("fake-pm");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.display().to_string()
        }

        #[test]
        fn test_runs_in_project_dir_and_captures_output() {
            let temp = TempDir::new().unwrap();
            let pm = script(temp.path(), r#"echo "cwd=$(pwd) args=$*"; echo warn >&2"#);
            let project = temp.path().join("proj");
            fs::create_dir(&project).unwrap();

            let output = run_install(&pm, &project, &InstallRequest::WithLibraries("lodash".into()))
                .unwrap();
            let project = fs::canonicalize(&project).unwrap();
            assert!(output.combined.contains(&format!("cwd={}", project.display())));
            assert!(output.combined.contains("args=install lodash"));
            assert!(output.combined.contains("warn"));
        }

        #[test]
        fn test_failure_carries_stderr() {
            let temp = TempDir::new().unwrap();
            let pm = script(temp.path(), "echo 'npm ERR! 404 nope' >&2; exit 1");
            let err = run_install(&pm, temp.path(), &InstallRequest::Plain).unwrap_err();
            assert_eq!(err.to_string(), "Execution failed: npm ERR! 404 nope");
        }

        #[test]
        fn test_failure_without_stderr_reports_status() {
            let temp = TempDir::new().unwrap();
            let pm = script(temp.path(), "exit 3");
            let err = run_install(&pm, temp.path(), &InstallRequest::Plain).unwrap_err();
            assert!(matches!(err, GenerateError::Subprocess(ref msg) if msg.contains("exited with")));
        }
    }
}
