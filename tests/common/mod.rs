//! Common test utilities for mta-helper CLI tests.
//!
//! `TestEnv` owns a temporary resource folder and runs the binary against
//! it with stdin detached, so the tool never prompts.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout split into non-empty lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect()
    }
}

/// Isolated resource folder plus the binary under test
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_mta-helper")),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a file relative to the root, creating parent folders.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write fixture");
        self
    }

    /// Read a file relative to the root.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root.path().join(relative))
            .unwrap_or_else(|e| panic!("read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root.path().join(relative).exists()
    }

    /// Run the CLI with the given args from inside the root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null())
            .output()
            .expect("run mta-helper");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
