//! Ls command implementation.

use anyhow::{Context, Result};
use propbind_config::SourceLoader;

use crate::commands::print_output;
use crate::formatters::{OutputFormat, get_formatter};
use crate::sources;

pub fn run(search_path: Option<&str>, directory: &str, output_format: &str) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let files = sources::loader(search_path)
        .list_files(directory)
        .with_context(|| format!("Failed to list '{directory}'"))?;

    print_output(&get_formatter(format).format_files(directory, &files)?);
    Ok(())
}
