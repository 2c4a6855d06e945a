//! Show command implementation.

use anyhow::Result;

use crate::commands::{mask_secret, print_output};
use crate::formatters::{OutputFormat, SettingRow, get_formatter};
use crate::sources;

pub fn run(
    search_path: Option<&str>,
    sources: &[String],
    show_secrets: bool,
    output_format: &str,
) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let context = sources::context(search_path, sources)?;

    let rows: Vec<SettingRow> = context
        .settings()
        .iter()
        .map(|(key, setting)| SettingRow {
            key: key.to_string(),
            value: mask_secret(key, &setting.value, show_secrets),
            origin: setting.origin.clone(),
        })
        .collect();

    let formatter = get_formatter(format);
    print_output(&formatter.format_settings(&rows)?);
    Ok(())
}
