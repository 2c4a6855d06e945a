//! Caller-facing configuration context.
//!
//! Responsibilities:
//! - Build merged settings once from an ordered source list.
//! - Configure `Configurable` targets, or arbitrary descriptor lists through
//!   a `FieldWriter`, from those settings plus environment overrides.
//!
//! Does NOT handle:
//! - Any merging or conversion logic of its own (see `merge.rs` and `binder`).
//!
//! Invariants:
//! - The settings held by a context never change after construction, so one
//!   context can configure any number of targets.

use crate::binder::{BindReport, FieldBinder, FieldDescriptor, FieldWriter, Resolved, Value};
use crate::error::{ConfigError, WriteError};
use crate::merge::{ConfigMerger, MergedSettings, PropertySource};
use crate::source::SourceLoader;

/// A type whose fields can be configured from properties.
///
/// Usually implemented with [`configurable!`](crate::configurable).
pub trait Configurable {
    /// Descriptors of the bindable fields, in binding order.
    fn config_fields() -> Vec<FieldDescriptor>;

    /// Store `value` in the field described by `field`.
    fn write_field(&mut self, field: &FieldDescriptor, value: Value) -> Result<(), WriteError>;
}

/// Merged settings plus the binder used to apply them.
#[derive(Debug, Clone, Default)]
pub struct ConfigContext {
    settings: MergedSettings,
    binder: FieldBinder,
}

impl ConfigContext {
    /// Merge `sources` in order through `loader`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SourceRead` or `ConfigError::SourceParse` if an
    /// existing source cannot be read or parsed.
    pub fn new<L, I, S>(loader: L, sources: I) -> Result<Self, ConfigError>
    where
        L: SourceLoader,
        I: IntoIterator<Item = S>,
        S: Into<PropertySource>,
    {
        let settings = ConfigMerger::new(loader).build(sources)?;
        Ok(Self::from_settings(settings))
    }

    /// Read a single source.
    pub fn from_source<L: SourceLoader>(loader: L, source: &str) -> Result<Self, ConfigError> {
        Self::new(loader, [source])
    }

    pub fn from_settings(settings: MergedSettings) -> Self {
        Self {
            settings,
            binder: FieldBinder::new(),
        }
    }

    /// Replace the binder, e.g. to substitute the environment lookup.
    pub fn with_binder(mut self, binder: FieldBinder) -> Self {
        self.binder = binder;
        self
    }

    pub fn settings(&self) -> &MergedSettings {
        &self.settings
    }

    /// Effective value of `property`, environment first.
    pub fn resolve(&self, property: &str) -> Option<Resolved> {
        self.binder.resolve(property, &self.settings)
    }

    /// Bind `fields` through `writer`.
    pub fn bind<W>(&self, fields: &[FieldDescriptor], writer: &mut W) -> Result<BindReport, ConfigError>
    where
        W: FieldWriter + ?Sized,
    {
        self.binder.bind(fields, &self.settings, writer)
    }

    /// Configure every declared field of `target`.
    ///
    /// Fields without a value keep whatever `target` already holds.
    pub fn configure<T: Configurable>(&self, target: &mut T) -> Result<BindReport, ConfigError> {
        let fields = T::config_fields();
        let mut writer =
            |field: &FieldDescriptor, value: Value| -> Result<(), WriteError> { target.write_field(field, value) };
        self.bind(&fields, &mut writer)
    }
}

/// Implement [`Configurable`] for a struct by listing its bound fields.
///
/// Each entry names the field, its Rust type and the property it is read
/// from. The field type must implement [`FromValue`](crate::FromValue).
///
/// ```
/// use propbind_config::{ConfigContext, EmbeddedLoader, FieldBinder};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: i32,
///     tags: Vec<String>,
/// }
///
/// propbind_config::configurable!(Server {
///     host: String => "SERVER_HOST",
///     port: i32 => "SERVER_PORT",
///     tags: Vec<String> => "SERVER_TAGS",
/// });
///
/// let loader = EmbeddedLoader::new()
///     .with_resource("server.properties", "SERVER_HOST=example.org\nSERVER_PORT=8080\n");
/// let context = ConfigContext::from_source(loader, "server.properties")
///     .unwrap()
///     .with_binder(FieldBinder::with_env_lookup(|_| None));
///
/// let mut server = Server::default();
/// context.configure(&mut server).unwrap();
/// assert_eq!(server.host, "example.org");
/// assert_eq!(server.port, 8080);
/// assert!(server.tags.is_empty());
/// ```
#[macro_export]
macro_rules! configurable {
    ($target:ty { $($field:ident : $ty:ty => $property:expr),* $(,)? }) => {
        impl $crate::Configurable for $target {
            fn config_fields() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $($crate::FieldDescriptor::new(
                        ::std::stringify!($field),
                        $property,
                        <$ty as $crate::FromValue>::field_type(),
                    )),*
                ]
            }

            fn write_field(
                &mut self,
                field: &$crate::FieldDescriptor,
                value: $crate::Value,
            ) -> ::std::result::Result<(), $crate::WriteError> {
                match field.name() {
                    $(::std::stringify!($field) => {
                        self.$field = <$ty as $crate::FromValue>::from_value(value)?;
                        ::std::result::Result::Ok(())
                    })*
                    other => ::std::result::Result::Err($crate::WriteError::UnknownField(
                        ::std::string::ToString::to_string(other),
                    )),
                }
            }
        }
    };
}
