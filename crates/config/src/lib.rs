//! Properties-file configuration for typed Rust settings.
//!
//! This crate merges an ordered list of `key=value` property sources into a
//! single set of settings (later sources win), then binds those settings onto
//! typed fields. An environment variable named exactly like a property
//! overrides every file value.
//!
//! ```
//! use propbind_config::{ConfigContext, EmbeddedLoader, FieldBinder};
//!
//! let loader = EmbeddedLoader::new()
//!     .with_resource("base.properties", "PORT=80\nHOST=localhost\n")
//!     .with_resource("local.properties", "PORT=8080\n");
//! let context = ConfigContext::new(loader, ["base.properties", "local.properties"])
//!     .unwrap()
//!     .with_binder(FieldBinder::with_env_lookup(|_| None));
//!
//! assert_eq!(context.resolve("PORT").unwrap().value, "8080");
//! assert_eq!(context.resolve("HOST").unwrap().value, "localhost");
//! ```

mod binder;
pub mod constants;
mod context;
mod env;
mod error;
mod merge;
pub mod properties;
mod source;

pub use binder::{
    BindReport, ConfigEnum, FieldBinder, FieldDescriptor, FieldType, FieldWriter, FromValue,
    Resolved, Value, ValueOrigin, is_secret_property,
};
pub use context::{ConfigContext, Configurable};
pub use env::{env_var_raw, load_dotenv};
pub use error::{ConfigError, ConversionFailure, WriteError};
pub use merge::{ConfigMerger, MergedSettings, PropertySource, Setting};
pub use properties::{PropertiesError, parse_properties};
pub use source::{DirectoryLoader, EmbeddedLoader, SourceLoader};
