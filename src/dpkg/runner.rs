//! Pluggable strategies for running dpkg-query.

use std::process::Command;

/// Builds the command that runs dpkg-query with a compiled format string.
///
/// This is the injection point for *where* the query runs. The engine
/// hands the strategy a compiled format string and runs whatever command
/// comes back, capturing its output.
pub trait QueryRunner {
    /// Build the command for one query. The returned command is run once
    /// and must print one line per package on stdout.
    fn command(&self, format: &str) -> Command;
}

/// Runs dpkg-query on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRunner;

impl QueryRunner for LocalRunner {
    fn command(&self, format: &str) -> Command {
        let mut cmd = Command::new("dpkg-query");
        cmd.arg("-W").arg(format!("-f={format}"));
        cmd
    }
}

/// Runs dpkg-query inside a container image, for inspecting an image's
/// package database rather than the host's.
#[derive(Debug, Clone)]
pub struct ContainerRunner {
    image: String,
}

impl ContainerRunner {
    /// Target the given image reference (e.g. `ubuntu:noble`).
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

impl QueryRunner for ContainerRunner {
    fn command(&self, format: &str) -> Command {
        let mut cmd = Command::new("docker");
        cmd.args(["run", "--rm", &self.image, "dpkg-query", "-W"])
            .arg(format!("-f={format}"));
        cmd
    }
}

/// Report whether dpkg-query is available on the host's `PATH`.
///
/// Callers use this to decide whether running the engine is worthwhile
/// at all (a non-Debian host has no package database to query).
pub fn present() -> bool {
    Command::new("dpkg-query")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
