//! Centralized constants for the propbind workspace.
//!
//! This module contains names and markers shared by the library and the CLI
//! to avoid string duplication.

// =============================================================================
// Environment
// =============================================================================

/// Setting this variable to `1` or `true` disables `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Platform path list of directories searched for property sources.
pub const SEARCH_PATH_VAR: &str = "PROPBIND_SEARCH_PATH";

// =============================================================================
// Binding
// =============================================================================

/// Separator between the elements of a list-typed property.
pub const LIST_SEPARATOR: char = ',';

/// Lowercase substrings marking a property name as secret.
///
/// Values of secret properties are never written to logs.
pub const SECRET_MARKERS: &[&str] = &["password", "key"];

/// Placeholder shown instead of a secret value.
pub const REDACTED: &str = "********";

/// Origin label for settings that were not read from a named source.
pub const INLINE_ORIGIN: &str = "<inline>";
