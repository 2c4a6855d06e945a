//! Process environment access.
//!
//! Responsibilities:
//! - Read override variables for the binder.
//! - Load a `.env` file into the process environment on request.
//!
//! Does NOT handle:
//! - Deciding precedence between environment and file values (see `binder`).
//!
//! Invariants:
//! - A variable set to an empty string is still "set".
//! - `load_dotenv()` is a no-op when `DOTENV_DISABLED` is `1` or `true`.
//! - Dotenv errors NEVER include raw .env line contents.

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::ConfigError;

/// Raw value of the environment variable `name`, if it is set.
///
/// Non-UTF-8 content is converted lossily rather than treated as unset.
pub fn env_var_raw(name: &str) -> Option<String> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return None;
    }
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file in the working directory
/// or one of its parents.
///
/// Returns `Ok(true)` if a file was loaded. Variables already set in the
/// process are not overwritten.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` if the file has invalid syntax.
/// - `ConfigError::DotenvIo` if the file exists but cannot be read.
///
/// Missing `.env` files are silently ignored.
pub fn load_dotenv() -> Result<bool, ConfigError> {
    if dotenv_disabled() {
        return Ok(false);
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(true)
        }
        Err(e) if is_not_found(&e) => Ok(false),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
