//! Shared test utilities for propbind-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write property source fixtures into temp directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `PROPBIND_SEARCH_PATH` is cleared unless a test sets it.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `propbind-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `PROPBIND_SEARCH_PATH` and `RUST_LOG` are cleared so host settings do not leak in.
pub fn propbind_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("propbind-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("PROPBIND_SEARCH_PATH").env_remove("RUST_LOG");

    cmd
}

/// Property names used by the fixtures; host variables with these names are cleared.
pub const FIXTURE_KEYS: &[&str] = &["PORT", "HOST", "DB_PASSWORD", "TAGS", "MODE", "DEBUG"];

/// Returns a hermetic command whose search path is `dir`.
pub fn propbind_cmd_in(dir: &Path) -> Command {
    let mut cmd = propbind_cmd();
    cmd.env("PROPBIND_SEARCH_PATH", dir);
    for key in FIXTURE_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

/// Create a temp directory holding the given `(relative name, content)` files.
pub fn source_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture");
    }
    dir
}

/// Base and override sources used across command tests.
pub fn standard_sources() -> TempDir {
    source_dir(&[
        (
            "app.properties",
            "# application defaults\nPORT=80\nHOST=localhost\nDB_PASSWORD=hunter2\nTAGS=a, b ,c\nMODE=FAST\n",
        ),
        ("local.properties", "PORT=8080\n"),
    ])
}
