//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all output records as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use serde::Serialize;

use crate::formatters::{FieldOutcome, Formatter, ResolvedOutput, SettingRow};

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct Listing<'a> {
    directory: &'a str,
    files: &'a [String],
}

impl Formatter for JsonFormatter {
    fn format_settings(&self, settings: &[SettingRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(settings)?)
    }

    fn format_resolved(&self, resolved: &ResolvedOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(resolved)?)
    }

    fn format_check(&self, outcomes: &[FieldOutcome]) -> Result<String> {
        Ok(serde_json::to_string_pretty(outcomes)?)
    }

    fn format_files(&self, directory: &str, files: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Listing { directory, files })?)
    }
}
