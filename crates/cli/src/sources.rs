//! Source loading for command execution.
//!
//! Responsibilities:
//! - Build the directory loader from `--search-path` / `PROPBIND_SEARCH_PATH`.
//! - Build a `ConfigContext` from the sources named on the command line.
//!
//! Does NOT handle:
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - A missing or blank search path means the current working directory.

use anyhow::{Context, Result};
use propbind_config::{ConfigContext, DirectoryLoader};

/// Loader over the configured search path.
pub(crate) fn loader(search_path: Option<&str>) -> DirectoryLoader {
    match search_path.map(str::trim) {
        Some(paths) if !paths.is_empty() => DirectoryLoader::from_search_path(paths),
        _ => DirectoryLoader::new(["."]),
    }
}

/// Merge `sources` through the search-path loader.
pub(crate) fn context(search_path: Option<&str>, sources: &[String]) -> Result<ConfigContext> {
    let loader = loader(search_path);
    tracing::debug!(roots = ?loader.roots(), sources = ?sources, "Merging property sources");
    ConfigContext::new(loader, sources).context("Failed to load property sources")
}
