//! Ordered merge of property sources.
//!
//! Responsibilities:
//! - Load each named source through a `SourceLoader` and parse it.
//! - Fold the parsed pairs into one `MergedSettings`, later sources winning.
//!
//! Does NOT handle:
//! - Environment variable overrides (applied per field at bind time, see `binder`).
//! - Type conversion of values.
//!
//! Invariants:
//! - Absent or empty source identifiers and missing sources are skipped, never errors.
//! - A source that exists but fails to read or parse aborts the whole merge.
//! - Keys are case-sensitive; values are stored verbatim.
//! - `MergedSettings` is never mutated after `build` returns.

use std::collections::BTreeMap;

use crate::constants::INLINE_ORIGIN;
use crate::error::ConfigError;
use crate::properties::parse_properties;
use crate::source::SourceLoader;

/// Identifier of one entry in an ordered source list.
///
/// `None` and the empty string both mark an absent entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySource(Option<String>);

impl PropertySource {
    pub fn absent() -> Self {
        Self(None)
    }

    /// The resource name, or `None` for an absent entry.
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref().filter(|name| !name.is_empty())
    }
}

impl From<&str> for PropertySource {
    fn from(name: &str) -> Self {
        Self(Some(name.to_string()))
    }
}

impl From<String> for PropertySource {
    fn from(name: String) -> Self {
        Self(Some(name))
    }
}

impl From<&String> for PropertySource {
    fn from(name: &String) -> Self {
        Self(Some(name.clone()))
    }
}

impl From<Option<&str>> for PropertySource {
    fn from(name: Option<&str>) -> Self {
        Self(name.map(str::to_string))
    }
}

impl From<Option<String>> for PropertySource {
    fn from(name: Option<String>) -> Self {
        Self(name)
    }
}

/// One merged entry: the winning value and the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub value: String,
    pub origin: String,
}

/// Flat key/value mapping produced by merging an ordered source list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSettings {
    entries: BTreeMap<String, Setting>,
}

impl MergedSettings {
    /// The merged value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|setting| setting.value.as_str())
    }

    /// The merged value for `key` together with its origin.
    pub fn setting(&self, key: &str) -> Option<&Setting> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
        self.entries.iter().map(|(key, setting)| (key.as_str(), setting))
    }

    fn insert(&mut self, key: String, value: String, origin: &str) {
        self.entries.insert(
            key,
            Setting {
                value,
                origin: origin.to_string(),
            },
        );
    }
}

impl<K, V> FromIterator<(K, V)> for MergedSettings
where
    K: Into<String>,
    V: Into<String>,
{
    /// Build settings directly from pairs; later pairs win, origin is `<inline>`.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Self::default();
        for (key, value) in iter {
            settings.insert(key.into(), value.into(), INLINE_ORIGIN);
        }
        settings
    }
}

/// Builds `MergedSettings` from sources resolved through a `SourceLoader`.
#[derive(Debug, Clone)]
pub struct ConfigMerger<L> {
    loader: L,
}

impl<L: SourceLoader> ConfigMerger<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Merge `sources` left to right.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SourceRead` or `ConfigError::SourceParse` if a
    /// source exists but cannot be read or parsed. Missing sources are skipped.
    pub fn build<I, S>(&self, sources: I) -> Result<MergedSettings, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<PropertySource>,
    {
        let mut merged = MergedSettings::default();

        for source in sources {
            let source = source.into();
            let Some(name) = source.name() else {
                tracing::debug!("Skipping absent property source");
                continue;
            };

            let Some(reader) = self.loader.open(name)? else {
                tracing::warn!(source = name, "Did not find property source; skipping");
                continue;
            };

            let pairs = parse_properties(reader).map_err(|e| {
                tracing::error!(source = name, error = %e, "Error reading property source");
                e.into_config_error(name)
            })?;
            let count = pairs.len();
            for (key, value) in pairs {
                merged.insert(key, value, name);
            }
            tracing::info!(source = name, properties = count, "Added properties from source");
        }

        Ok(merged)
    }
}
