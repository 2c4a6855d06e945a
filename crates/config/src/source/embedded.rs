//! Resources compiled into the binary.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Read;

use super::{SourceLoader, is_hidden};
use crate::error::ConfigError;

/// In-memory resource table, typically filled with `include_str!` content.
///
/// Names use `/` as the directory separator regardless of platform.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedLoader {
    resources: BTreeMap<String, Cow<'static, str>>,
}

impl EmbeddedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous one with the same name.
    pub fn with_resource(
        mut self,
        name: impl Into<String>,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Cow<'static, str>>) {
        self.resources.insert(name.into(), content.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

impl SourceLoader for EmbeddedLoader {
    fn open(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, ConfigError> {
        Ok(self
            .resources
            .get(name)
            .map(|content| Box::new(content.as_bytes()) as Box<dyn Read + '_>))
    }

    fn list_files(&self, directory: &str) -> Result<Vec<String>, ConfigError> {
        let trimmed = directory.trim_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        };

        let mut exists = prefix.is_empty();
        let mut names = Vec::new();
        for name in self.resources.keys() {
            let Some(rest) = name.strip_prefix(&prefix) else {
                continue;
            };
            exists = true;
            // Entries below a nested directory are not listed.
            if rest.is_empty() || rest.contains('/') || is_hidden(rest) {
                continue;
            }
            names.push(rest.to_string());
        }

        if !exists {
            return Err(ConfigError::DirectoryNotFound(directory.to_string()));
        }
        Ok(names)
    }
}
