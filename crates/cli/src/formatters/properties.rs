//! Properties formatter implementation.
//!
//! Responsibilities:
//! - Format output records as `key=value` lines that parse back to the same pairs.
//!
//! Does NOT handle:
//! - Other output formats.
//!
//! Invariants:
//! - Origins are not part of the output; only key/value pairs are emitted.

use anyhow::Result;

use crate::formatters::{FieldOutcome, Formatter, ResolvedOutput, SettingRow};

/// Properties formatter.
pub struct PropertiesFormatter;

/// Escape a key so separators, comment markers and whitespace stay literal.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, c) in key.chars().enumerate() {
        match c {
            '=' | ':' | ' ' => {
                out.push('\\');
                out.push(c);
            }
            '#' | '!' if i == 0 => {
                out.push('\\');
                out.push(c);
            }
            _ => push_common(&mut out, c),
        }
    }
    out
}

/// Escape a value; only leading whitespace needs protecting.
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut leading = true;
    for c in value.chars() {
        if leading && c == ' ' {
            out.push_str("\\ ");
            continue;
        }
        leading = false;
        push_common(&mut out, c);
    }
    out
}

fn push_common(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\u{000C}' => out.push_str("\\f"),
        _ => out.push(c),
    }
}

fn line(key: &str, value: &str) -> String {
    format!("{}={}\n", escape_key(key), escape_value(value))
}

impl Formatter for PropertiesFormatter {
    fn format_settings(&self, settings: &[SettingRow]) -> Result<String> {
        Ok(settings.iter().map(|row| line(&row.key, &row.value)).collect())
    }

    fn format_resolved(&self, resolved: &ResolvedOutput) -> Result<String> {
        Ok(line(&resolved.key, &resolved.value))
    }

    fn format_check(&self, outcomes: &[FieldOutcome]) -> Result<String> {
        Ok(outcomes
            .iter()
            .filter_map(|outcome| {
                outcome
                    .value
                    .as_ref()
                    .map(|value| line(&outcome.field, &value.to_string()))
            })
            .collect())
    }

    fn format_files(&self, _directory: &str, files: &[String]) -> Result<String> {
        Ok(files.iter().map(|name| format!("{name}\n")).collect())
    }
}
