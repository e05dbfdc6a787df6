//! Shared helpers for CLI specs.

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory the CLI runs in
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent dirs
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    pub fn jg(&self) -> CliBuilder {
        let mut builder = cli();
        builder.cmd.current_dir(self.path());
        builder
    }
}

/// A `jg` invocation outside any project
pub fn cli() -> CliBuilder {
    let mut cmd = Command::cargo_bin("jg").expect("jg binary is built");
    cmd.env_remove("RUST_LOG");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> RunAssert {
        RunAssert(self.cmd.assert().failure())
    }
}

pub struct RunAssert(Assert);

impl RunAssert {
    pub fn code(self, code: i32) -> Self {
        RunAssert(self.0.code(code))
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        RunAssert(self.0.stdout(predicate::str::contains(expected)))
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        RunAssert(self.0.stderr(predicate::str::contains(expected)))
    }

    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        RunAssert(self.0.stderr(predicate::str::contains(unexpected).not()))
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).into_owned()
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout is JSON")
    }
}
