//! Shared helpers for the integration tests.
//!
//! [`TestProject`] is a throwaway working directory in which the `cursus`
//! binary is run. Colors are disabled so output can be matched as plain text.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary directory used as the working directory of `cursus`.
pub struct TestProject {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        std::fs::create_dir_all(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Write a file relative to the project directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Write `cursus.xml`.
    pub fn write_curriculum(&self, content: &str) -> Result<PathBuf> {
        self.write_file("cursus.xml", content)
    }

    /// Write `cursus.toml`.
    pub fn write_config(&self, content: &str) -> Result<PathBuf> {
        self.write_file("cursus.toml", content)
    }

    pub fn read_file(&self, relative: &str) -> Result<String> {
        let path = self.project_dir.join(relative);
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }

    pub fn file_exists(&self, relative: &str) -> bool {
        self.project_dir.join(relative).exists()
    }

    /// Run the `cursus` binary in the project directory.
    pub fn run_cursus(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(env!("CARGO_BIN_EXE_cursus"))
            .args(args)
            .current_dir(&self.project_dir)
            .env("NO_COLOR", "1")
            .env_remove("CURSUS_CONFIG")
            .env_remove("RUST_LOG")
            .output()
            .context("Failed to run cursus command")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Captured result of a `cursus` run.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStderr: {}",
            self.code, self.stderr
        );
        self
    }

    pub fn assert_failure(&self) -> &Self {
        assert!(!self.success, "Command unexpectedly succeeded\nStdout: {}", self.stdout);
        assert_eq!(self.code, Some(1), "Stderr: {}", self.stderr);
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }

    /// Lines of stderr starting with `warning:`.
    pub fn warnings(&self) -> Vec<&str> {
        self.stderr.lines().filter(|line| line.starts_with("warning:")).collect()
    }
}
