//! pip package manager
//!
//! Drives pip as `<python> -m pip`, so the packages managed are the ones of
//! that interpreter's environment.

use crate::core::types::{InstallSpec, InstalledPackage};
use crate::error::{PipDscError, Result};
use crate::packages::traits::PackageManager;
use crate::project_identity::PYTHON_CANDIDATES;
use crate::ui;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Options passed to every pip invocation ahead of the sub-command
const PIP_GLOBAL_ARGS: &[&str] = &["--no-input", "--disable-pip-version-check"];

pub struct PipManager {
    python: PathBuf,
    extra_args: Vec<String>,
}

impl PipManager {
    pub fn new(python: impl Into<PathBuf>, extra_args: Vec<String>) -> Self {
        Self {
            python: python.into(),
            extra_args,
        }
    }

    /// Build from user options: an explicit interpreter wins, otherwise the
    /// first known interpreter on PATH is used.
    pub fn from_options(python: Option<&Path>, pip_args: Option<&str>) -> Result<Self> {
        let python = match python {
            Some(path) => path.to_path_buf(),
            None => find_python()?,
        };
        let extra_args = match pip_args {
            Some(raw) => split_pip_args(raw)?,
            None => Vec::new(),
        };

        Ok(Self::new(python, extra_args))
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Full argv after the interpreter: `-m pip <global> <extra> <sub-command...>`
    fn pip_args(&self, sub_args: &[String]) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "pip".to_string()];
        args.extend(PIP_GLOBAL_ARGS.iter().map(|arg| arg.to_string()));
        args.extend(self.extra_args.iter().cloned());
        args.extend(sub_args.iter().cloned());
        args
    }

    fn command(&self, sub_args: &[String]) -> Command {
        let mut cmd = Command::new(&self.python);
        cmd.args(self.pip_args(sub_args));
        cmd
    }

    fn describe(&self, sub_args: &[String]) -> String {
        let mut parts = vec![self.python.display().to_string()];
        parts.extend(self.pip_args(sub_args));
        parts.join(" ")
    }

    /// Run a state-changing pip command. pip's own progress output goes to
    /// stderr so stdout stays reserved for JSON results.
    fn run_mutating(&self, sub_args: &[String], action: &str) -> Result<()> {
        let description = self.describe(sub_args);
        ui::verbose(&format!("Running: {}", description));

        let status = self
            .command(sub_args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(std::io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| PipDscError::SystemCommandFailed {
                command: description.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(PipDscError::PackageManagerError(format!(
                "pip {} failed ({})",
                action, status
            )));
        }

        Ok(())
    }
}

impl PackageManager for PipManager {
    fn list_installed(&self) -> Result<Vec<InstalledPackage>> {
        let sub_args = list_args();
        let description = self.describe(&sub_args);
        ui::verbose(&format!("Running: {}", description));

        let output = self
            .command(&sub_args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| PipDscError::SystemCommandFailed {
                command: description,
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PipDscError::PackageManagerError(format!(
                "Failed to list pip packages ({})",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_list_output(&stdout)
    }

    fn install(&self, spec: &InstallSpec) -> Result<()> {
        self.run_mutating(&install_args(spec), "install")
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.run_mutating(&uninstall_args(name), "uninstall")
    }

    fn is_available(&self) -> bool {
        if self.python.components().count() > 1 {
            self.python.is_file()
        } else {
            which::which(&self.python).is_ok()
        }
    }
}

fn list_args() -> Vec<String> {
    vec!["list".to_string(), "--format=json".to_string()]
}

fn install_args(spec: &InstallSpec) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if spec.upgrade {
        args.push("--upgrade".to_string());
    }
    args.push(spec.to_string());
    args
}

fn uninstall_args(name: &str) -> Vec<String> {
    vec![
        "uninstall".to_string(),
        "--yes".to_string(),
        name.to_string(),
    ]
}

/// Parse `pip list --format=json`: a JSON array of package objects
pub fn parse_list_output(output: &str) -> Result<Vec<InstalledPackage>> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(PipDscError::PackageManagerError(
            "pip list produced no output".to_string(),
        ));
    }
    Ok(serde_json::from_str(trimmed)?)
}

fn find_python() -> Result<PathBuf> {
    PYTHON_CANDIDATES
        .iter()
        .find_map(|candidate| which::which(candidate).ok())
        .ok_or_else(|| {
            PipDscError::DependencyMissing(format!(
                "no Python interpreter found on PATH (tried: {})",
                PYTHON_CANDIDATES.join(", ")
            ))
        })
}

fn split_pip_args(raw: &str) -> Result<Vec<String>> {
    shlex::split(raw)
        .ok_or_else(|| PipDscError::InvalidInput(format!("Cannot split pip arguments: {}", raw)))
}
