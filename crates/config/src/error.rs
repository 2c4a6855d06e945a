//! Error types for property loading and field binding.
//!
//! Responsibilities:
//! - Define the fatal error variants of a merge or bind pass.
//! - Define the conversion failure reasons and the writer failure type.
//!
//! Does NOT handle:
//! - Properties syntax errors before they are attributed to a source
//!   (see `properties.rs`, converted here via `PropertiesError::into_config_error`).
//!
//! Invariants:
//! - Every variant names the source, property or field it concerns.
//! - Raw property values never appear in error messages, so secrets cannot
//!   leak through error output.
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::{self, ErrorKind};
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors that abort a merge, bind or directory listing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source exists but its content could not be read.
    #[error("Failed to read property source '{name}'")]
    SourceRead {
        name: String,
        #[source]
        source: io::Error,
    },

    /// A source exists but is not a well-formed properties document.
    #[error("Failed to parse property source '{name}' at line {line}: {message}")]
    SourceParse {
        name: String,
        line: usize,
        message: String,
    },

    #[error("Invalid value for {property}: {reason}")]
    Conversion {
        property: String,
        #[source]
        reason: ConversionFailure,
    },

    #[error("Illegal property type '{type_name}' for field \"{field}\"")]
    UnsupportedType { field: String, type_name: String },

    /// The writer refused the converted value. This is a programming error
    /// in the target, not a data error.
    #[error("Unable to set field \"{field}\"")]
    Binding {
        field: String,
        #[source]
        source: WriteError,
    },

    #[error("Resource directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to list resource directory '{name}'")]
    DirectoryRead {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

/// Why a resolved string could not be converted to its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionFailure {
    #[error("not a valid integer ({0})")]
    Integer(#[from] ParseIntError),

    #[error("not a valid floating-point number ({0})")]
    Float(#[from] ParseFloatError),

    #[error("not a valid floating-point number (use Infinity or NaN for non-finite values)")]
    NonDecimalFloat,

    #[error("no member of {enum_name} matches")]
    NoEnumMember { enum_name: String },
}

/// Failure reported by a field writer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    #[error("field is read-only")]
    ReadOnly,

    #[error("no writable field named \"{0}\"")]
    UnknownField(String),

    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{0}")]
    Rejected(String),
}
