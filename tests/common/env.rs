//! Test environment for isolated Lightbox runs.
//!
//! `TestEnv` owns a temporary library and a temporary home directory, and
//! runs the built `lightbox` binary against them with colors off and the
//! user config redirected through `LIGHTBOX_TEST_HOME`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a Lightbox CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {:?} ({})\nstdout:\n{}", line, e, self.stdout))
            })
            .collect()
    }
}

/// Isolated library + home directory
pub struct TestEnv {
    pub library: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
    env_vars: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            library: TempDir::new().expect("Failed to create library dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_lightbox")),
            env_vars: Vec::new(),
        }
    }

    /// Set an environment variable for every run
    pub fn with_env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.env_vars
            .push((key.to_string(), value.as_ref().display().to_string()));
        self
    }

    pub fn root(&self) -> &Path {
        self.library.path()
    }

    /// Path relative to the library root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.library.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run lightbox from the library root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.library.path(), args)
    }

    /// Run lightbox from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("LIGHTBOX_TEST_HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("LIGHTBOX_JOBS")
            .env_remove("LIGHTBOX_MAGICK")
            .env_remove("LIGHTBOX_EXIV2")
            .env_remove("LIGHTBOX_SIDECAR_EXTENSIONS");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute lightbox");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file below the library root, creating parents
    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_home(&self, relative: &str, content: &str) {
        let full_path = self.home_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.path(relative)).expect("Failed to create directory");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}
