//! Property source lookup.
//!
//! Responsibilities:
//! - Define the `SourceLoader` contract: open a named resource or report that
//!   it does not exist, and enumerate the files of a logical directory.
//! - Provide a directory search-path loader and an embedded resource loader.
//!
//! Does NOT handle:
//! - Parsing resource content (see `properties.rs`).
//! - Deciding whether a missing resource is an error (see `merge.rs`; it is not).
//!
//! Invariants:
//! - `open` returns `Ok(None)` for a missing resource; errors are reserved for
//!   resources that exist but cannot be opened.
//! - `list_files` is non-recursive, skips directories and hidden entries, and
//!   returns names sorted.

use std::io::Read;

use crate::error::ConfigError;

mod directory;
mod embedded;

pub use directory::DirectoryLoader;
pub use embedded::EmbeddedLoader;

/// Resolves logical resource names to readable content.
pub trait SourceLoader {
    /// Open the resource called `name`, or return `Ok(None)` if it does not exist.
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, ConfigError>;

    /// List the non-hidden file names directly inside `directory`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DirectoryNotFound` if no such directory exists.
    fn list_files(&self, directory: &str) -> Result<Vec<String>, ConfigError>;
}

impl<L: SourceLoader + ?Sized> SourceLoader for &L {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, ConfigError> {
        (**self).open(name)
    }

    fn list_files(&self, directory: &str) -> Result<Vec<String>, ConfigError> {
        (**self).list_files(directory)
    }
}

impl<L: SourceLoader + ?Sized> SourceLoader for Box<L> {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, ConfigError> {
        (**self).open(name)
    }

    fn list_files(&self, directory: &str) -> Result<Vec<String>, ConfigError> {
        (**self).list_files(directory)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
