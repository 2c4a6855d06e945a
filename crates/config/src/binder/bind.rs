//! Field binding: resolve, convert, write.

use std::fmt;
use std::sync::Arc;

use super::convert::convert;
use super::field::FieldDescriptor;
use super::value::Value;
use crate::constants::SECRET_MARKERS;
use crate::env::env_var_raw;
use crate::error::{ConfigError, WriteError};
use crate::merge::MergedSettings;

/// Writes converted values into a target.
///
/// Implemented for every `FnMut(&FieldDescriptor, Value) -> Result<(), WriteError>`.
pub trait FieldWriter {
    fn write(&mut self, field: &FieldDescriptor, value: Value) -> Result<(), WriteError>;
}

impl<F> FieldWriter for F
where
    F: FnMut(&FieldDescriptor, Value) -> Result<(), WriteError>,
{
    fn write(&mut self, field: &FieldDescriptor, value: Value) -> Result<(), WriteError> {
        self(field, value)
    }
}

/// Where an effective value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueOrigin {
    Environment,
    Source(String),
}

impl fmt::Display for ValueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueOrigin::Environment => write!(f, "environment"),
            ValueOrigin::Source(name) => write!(f, "{name}"),
        }
    }
}

/// The effective string value of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub origin: ValueOrigin,
}

/// Outcome of a successful bind pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Properties whose value was written, in field order.
    pub applied: Vec<String>,
    /// Properties with no value anywhere; their fields were left untouched.
    pub defaulted: Vec<String>,
    /// Fields skipped because they declare no property name.
    pub unnamed: Vec<String>,
}

type EnvLookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Binds merged settings and environment overrides onto fields.
#[derive(Clone)]
pub struct FieldBinder {
    env: Arc<EnvLookup>,
}

impl Default for FieldBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FieldBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinder").finish_non_exhaustive()
    }
}

impl FieldBinder {
    /// A binder that consults the process environment.
    pub fn new() -> Self {
        Self::with_env_lookup(env_var_raw)
    }

    /// A binder that consults `lookup` instead of the process environment.
    ///
    /// `lookup` returns the raw (untrimmed) value of a set variable.
    pub fn with_env_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            env: Arc::new(lookup),
        }
    }

    /// Effective value of `property`: the trimmed environment variable if
    /// set (even to an empty string), else the merged entry.
    pub fn resolve(&self, property: &str, settings: &MergedSettings) -> Option<Resolved> {
        if let Some(raw) = (self.env)(property) {
            return Some(Resolved {
                value: raw.trim().to_string(),
                origin: ValueOrigin::Environment,
            });
        }
        settings.setting(property).map(|setting| Resolved {
            value: setting.value.clone(),
            origin: ValueOrigin::Source(setting.origin.clone()),
        })
    }

    /// Resolve, convert and write every field in order.
    ///
    /// Fields without a property name and properties without a value are
    /// skipped. Writes made before a failing field are kept.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Conversion` if a value does not convert to its type.
    /// - `ConfigError::UnsupportedType` if a field's type has no conversion.
    /// - `ConfigError::Binding` if `writer` rejects a value.
    pub fn bind<W>(
        &self,
        fields: &[FieldDescriptor],
        settings: &MergedSettings,
        writer: &mut W,
    ) -> Result<BindReport, ConfigError>
    where
        W: FieldWriter + ?Sized,
    {
        let mut report = BindReport::default();

        for field in fields {
            let Some(property) = field.property() else {
                tracing::warn!(
                    field = field.name(),
                    "Field does not declare a property name; skipping"
                );
                report.unnamed.push(field.name().to_string());
                continue;
            };

            let Some(resolved) = self.resolve(property, settings) else {
                tracing::debug!(property, "No configuration found for setting; leaving at default value");
                report.defaulted.push(property.to_string());
                continue;
            };

            let value = convert(field, property, &resolved.value)?;
            writer
                .write(field, value)
                .map_err(|source| ConfigError::Binding {
                    field: field.name().to_string(),
                    source,
                })?;

            if is_secret_property(property) {
                tracing::info!(property, origin = %resolved.origin, "Configured setting");
            } else {
                tracing::info!(
                    property,
                    value = %resolved.value,
                    origin = %resolved.origin,
                    "Configured setting"
                );
            }
            report.applied.push(property.to_string());
        }

        Ok(report)
    }
}

/// True if `property` looks like it holds a secret (`password` or `key`,
/// case-insensitive).
pub fn is_secret_property(property: &str) -> bool {
    let lower = property.to_lowercase();
    SECRET_MARKERS.iter().any(|marker| lower.contains(marker))
}
