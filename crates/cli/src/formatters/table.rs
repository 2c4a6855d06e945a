//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format output records as aligned, human-readable tables.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;

use crate::formatters::{FieldOutcome, Formatter, ResolvedOutput, SettingRow};

/// Table formatter.
pub struct TableFormatter;

/// Width of the key column: the longest key, at least as wide as the header.
fn key_width<'a>(keys: impl Iterator<Item = &'a str>, header: &str) -> usize {
    keys.map(str::len).max().unwrap_or(0).max(header.len())
}

impl Formatter for TableFormatter {
    fn format_settings(&self, settings: &[SettingRow]) -> Result<String> {
        if settings.is_empty() {
            return Ok("No settings found.".to_string());
        }

        let width = key_width(settings.iter().map(|row| row.key.as_str()), "Key");
        let mut output = format!("{:<width$}  {:<30} {}\n", "Key", "Value", "Origin");
        output.push_str(&format!("{}\n", "-".repeat(width + 2 + 31 + 6)));
        for row in settings {
            output.push_str(&format!(
                "{:<width$}  {:<30} {}\n",
                row.key, row.value, row.origin
            ));
        }
        Ok(output)
    }

    fn format_resolved(&self, resolved: &ResolvedOutput) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("{:<10} {}\n", "Key:", resolved.key));
        output.push_str(&format!("{:<10} {}\n", "Value:", resolved.value));
        output.push_str(&format!("{:<10} {}", "Origin:", resolved.origin));
        Ok(output)
    }

    fn format_check(&self, outcomes: &[FieldOutcome]) -> Result<String> {
        if outcomes.is_empty() {
            return Ok("No fields declared.".to_string());
        }

        let width = key_width(outcomes.iter().map(|o| o.field.as_str()), "Field");
        let mut output = format!("{:<width$}  {:<16} {}\n", "Field", "Type", "Value");
        output.push_str(&format!("{}\n", "-".repeat(width + 2 + 17 + 10)));
        for outcome in outcomes {
            let value = outcome
                .value
                .as_ref()
                .map_or_else(|| "(not set)".to_string(), ToString::to_string);
            output.push_str(&format!(
                "{:<width$}  {:<16} {}\n",
                outcome.field, outcome.field_type, value
            ));
        }
        Ok(output)
    }

    fn format_files(&self, directory: &str, files: &[String]) -> Result<String> {
        if files.is_empty() {
            return Ok(format!("No files found in '{directory}'."));
        }
        Ok(files.join("\n"))
    }
}
