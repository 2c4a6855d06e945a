//! Get command implementation.

use anyhow::Result;

use crate::commands::{mask_secret, print_output};
use crate::error::CliError;
use crate::formatters::{OutputFormat, ResolvedOutput, get_formatter};
use crate::sources;

pub fn run(
    search_path: Option<&str>,
    key: &str,
    sources: &[String],
    show_secrets: bool,
    output_format: &str,
) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let context = sources::context(search_path, sources)?;

    let resolved = context
        .resolve(key)
        .ok_or_else(|| CliError::Unresolved(key.to_string()))?;

    let output = ResolvedOutput {
        key: key.to_string(),
        value: mask_secret(key, &resolved.value, show_secrets),
        origin: resolved.origin.to_string(),
    };
    print_output(&get_formatter(format).format_resolved(&output)?);
    Ok(())
}
