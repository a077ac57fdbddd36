//! Shared test utilities for envtag integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted in a temporary directory.
//!
//! Invariants / Assumptions:
//! - `ENVTAG_*` and `RUST_LOG` are cleared so the host cannot leak settings.
//! - Each command runs inside its own `TempDir`, so the default `.env` is
//!   whatever the test writes there.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary working directory for one test.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn create() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Writes `content` to `name` inside the workspace.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Returns a hermetic `envtag` command running in this workspace.
    pub fn envtag_cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envtag");
        cmd.current_dir(self.dir.path())
            .env_remove("ENVTAG_FILES")
            .env_remove("ENVTAG_FORMAT")
            .env_remove("ENVTAG_LOG_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }
}
