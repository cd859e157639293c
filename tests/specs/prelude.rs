// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the kindly binary against fixtures
//! and temporary projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;

use tempfile::TempDir;

/// Minimal valid config file content.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Returns a Command configured to run the kindly binary
pub fn kindly_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kindly"));
    cmd.env_remove("KINDLY_CONFIG").env_remove("KINDLY_LOG").env("NO_COLOR", "1");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A throwaway project directory with its own kindly.toml.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty directory, marked as a git root so config discovery stops here.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Directory with a minimal kindly.toml.
    pub fn with_defaults() -> Self {
        let project = Self::empty();
        project.config(MINIMAL_CONFIG);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self, content: &str) {
        self.file("kindly.toml", content);
    }

    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}

/// Builder for `kindly check` invocations.
pub struct CheckBuilder {
    dir: Option<PathBuf>,
    args: Vec<String>,
    stdin: Option<String>,
}

/// Start a `kindly check` invocation.
pub fn check() -> CheckBuilder {
    CheckBuilder { dir: None, args: Vec::new(), stdin: None }
}

impl CheckBuilder {
    /// Run inside `tests/fixtures/<name>`.
    pub fn on(mut self, name: &str) -> Self {
        self.dir = Some(fixture(name));
        self
    }

    /// Run inside `project`.
    pub fn pwd(mut self, project: &Project) -> Self {
        self.dir = Some(project.path().to_path_buf());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Pipe `text` to stdin and check it with `-`.
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self.args.push("-".to_string());
        self
    }

    pub fn json(self) -> Self {
        self.args(&["-o", "json"])
    }

    fn output(&self) -> Output {
        let mut cmd = kindly_cmd();
        cmd.arg("check").args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        let assert = match &self.stdin {
            Some(text) => cmd.write_stdin(text.clone()).assert(),
            None => cmd.assert(),
        };
        assert.get_output().clone()
    }

    fn expect_code(self, code: i32) -> RunResult {
        let output = self.output();
        let result = RunResult::from(output);
        assert_eq!(
            result.code, code,
            "expected exit code {code}\nstdout:\n{}\nstderr:\n{}",
            result.stdout, result.stderr
        );
        result
    }

    /// Expect exit code 0.
    pub fn passes(self) -> RunResult {
        self.expect_code(0)
    }

    /// Expect exit code 1 (findings).
    pub fn fails(self) -> RunResult {
        self.expect_code(1)
    }

    /// Expect exit code 2 (config or I/O error).
    pub fn errors(self) -> RunResult {
        self.expect_code(2)
    }
}

/// Captured output of a finished run.
pub struct RunResult {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunResult {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout should be JSON")
    }
}
