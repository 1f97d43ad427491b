//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated temp directory for TAP input files
//! - Controlling the environment the binary sees
//! - Executing `ctap` with arguments and optional stdin

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{Sample, write_tap};

/// Environment variables that change ctap's behaviour and must not leak in
/// from the developer's shell or CI runner.
const CTAP_ENV_VARS: &[&str] = &[
    "CI",
    "RUST_LOG",
    "CTAP_FAILURES",
    "CTAP_GLYPHS",
    "CTAP_SUMMARY",
    "CTAP_COLOR",
    "CTAP_CVERSION",
    "CTAP_CPLAN",
    "CTAP_COK",
    "CTAP_CFAIL",
    "CTAP_CDIAG",
    "CTAP_CBAIL",
    "CTAP_CSUMMOK",
    "CTAP_CSUMMFAIL",
    "CTAP_CPLANFAIL",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use ctap_testing::{Sample, TestWorld};
///
/// let world = TestWorld::new().with_sample(Sample::SomeFail);
/// let result = world.run(&["-s", "some_fail.tap"]).unwrap();
/// assert_eq!(result.code(), Some(3));
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self {
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root (also the working directory of every run).
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the temp directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Set an environment variable for command execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Place a sample TAP file in the temp directory under its file name.
    pub fn with_sample(self, sample: Sample) -> Self {
        sample
            .write_to(self.temp_dir.path())
            .expect("Failed to write sample");
        self
    }

    /// Place arbitrary TAP text in the temp directory.
    pub fn with_tap(self, name: &str, content: &str) -> Self {
        write_tap(self.temp_dir.path(), name, content).expect("Failed to write TAP file");
        self
    }

    /// Configure a Command with this test environment.
    ///
    /// Clears every variable ctap reads, then applies the world's own.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path());

        for key in CTAP_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run ctap with the given arguments and no stdin.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, None)
    }

    /// Run ctap reading TAP from stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: impl AsRef<[u8]>) -> Result<CliResult> {
        self.execute(args, Some(input.as_ref()))
    }

    fn execute(&self, args: &[&str], input: Option<&[u8]>) -> Result<CliResult> {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ctap")
            .map_err(|e| anyhow::anyhow!("Failed to find ctap binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(input.unwrap_or_default().to_vec());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Process exit code, `None` if killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Stdout split into lines.
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
