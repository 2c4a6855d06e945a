//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants and CLI lookup failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.

use propbind_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for propbind-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Source error - a property source exists but could not be read or parsed.
    SourceError = 2,

    /// Conversion error - a value does not convert to its declared type.
    ///
    /// Scripts should fix the property value, not retry.
    ConversionError = 3,

    /// Not found - an unresolved property or a missing directory.
    NotFound = 4,

    /// Unsupported type - a field declares a type with no conversion.
    UnsupportedType = 5,

    /// Binding error - the target refused a converted value.
    BindingError = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::SourceRead { .. } | ConfigError::SourceParse { .. } => {
                ExitCode::SourceError
            }
            ConfigError::Conversion { .. } => ExitCode::ConversionError,
            ConfigError::UnsupportedType { .. } => ExitCode::UnsupportedType,
            ConfigError::Binding { .. } => ExitCode::BindingError,
            ConfigError::DirectoryNotFound(_) => ExitCode::NotFound,
            ConfigError::DirectoryRead { .. } => ExitCode::SourceError,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Failures detected by the CLI itself rather than the config library.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Property '{0}' is not set in any source or the environment")]
    Unresolved(String),

    #[error("Invalid output format: {0}. Valid options: table, json, properties")]
    InvalidOutputFormat(String),

    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::Unresolved(_) => ExitCode::NotFound,
            CliError::InvalidOutputFormat(_) | CliError::DuplicateField(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }

        ExitCode::GeneralError
    }
}
