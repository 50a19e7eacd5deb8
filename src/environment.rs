use std::path::PathBuf;
use std::process::Command;

use crate::error::{BundlerError, Result};

/// Capability seams against the build host, so the orchestration logic
/// can be exercised with a substitute in tests.
pub trait BuildEnvironment {
    /// Check whether an executable tool is reachable. Absence is a
    /// normal answer, not an error.
    fn tool_available(&self, tool: &str) -> bool;

    /// Install a package via pip. Failure propagates to the caller.
    fn install_package(&self, package: &str) -> Result<()>;

    /// Resolve the on-disk directory of an installed Python package.
    /// Returns `None` when the package is not importable.
    fn resolve_package_dir(&self, package: &str) -> Option<PathBuf>;

    /// Run a program to completion with inherited stdio.
    fn run_tool(&self, program: &str, args: &[String]) -> Result<()>;
}

/// Real environment backed by PATH lookup and child processes
pub struct SystemEnvironment {
    python: PathBuf,
}

impl SystemEnvironment {
    pub fn new() -> Self {
        // Prefer `python`, fall back to `python3`. If neither resolves,
        // keep the bare name and let the spawn failure surface later.
        let python = which::which("python")
            .or_else(|_| which::which("python3"))
            .unwrap_or_else(|_| PathBuf::from("python"));

        Self { python }
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildEnvironment for SystemEnvironment {
    fn tool_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }

    fn install_package(&self, package: &str) -> Result<()> {
        let status = Command::new(&self.python)
            .args(["-m", "pip", "install", package])
            .status()
            .map_err(|source| BundlerError::Spawn {
                program: self.python.to_string_lossy().to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BundlerError::ToolFailed {
                program: "pip".to_string(),
                status,
            })
        }
    }

    fn resolve_package_dir(&self, package: &str) -> Option<PathBuf> {
        let script = format!(
            "import os, {pkg}; print(os.path.dirname({pkg}.__file__))",
            pkg = package
        );

        let output = Command::new(&self.python)
            .args(["-c", &script])
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        }
    }

    fn run_tool(&self, program: &str, args: &[String]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| BundlerError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BundlerError::ToolFailed {
                program: program.to_string(),
                status,
            })
        }
    }
}
