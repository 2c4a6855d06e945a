//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide three output formats: Table, JSON and Properties.
//! - Define the serializable output records shared by every command.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Masking secrets (callers pass already-masked records).
//!
//! Invariants:
//! - JSON output is always valid JSON, including for empty results (`[]`).
//! - Properties output can be read back as a properties document.
//! - Table output for empty results is a human message.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use propbind_config::Value;
use serde::Serialize;

use crate::error::CliError;

mod json;
mod properties;
mod table;

pub use json::JsonFormatter;
pub use properties::PropertiesFormatter;
pub use table::TableFormatter;

/// Output format selected with `-o/--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Properties,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "properties" | "props" => Ok(OutputFormat::Properties),
            _ => Err(CliError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// One merged setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
    pub origin: String,
}

/// The effective value of one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOutput {
    pub key: String,
    pub value: String,
    pub origin: String,
}

/// A converted value, in a shape that serializes naturally to JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckedValue {
    Text(String),
    Int(i32),
    Float(f32),
    Double(f64),
    Bool(bool),
    List(Vec<CheckedValue>),
}

impl From<Value> for CheckedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(s) | Value::Enum(s) => CheckedValue::Text(s),
            Value::Int(i) => CheckedValue::Int(i),
            Value::Float(f) => CheckedValue::Float(f),
            Value::Double(d) => CheckedValue::Double(d),
            Value::Bool(b) => CheckedValue::Bool(b),
            Value::List(items) => CheckedValue::List(items.into_iter().map(Into::into).collect()),
        }
    }
}

impl fmt::Display for CheckedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckedValue::Text(s) => write!(f, "{s}"),
            CheckedValue::Int(i) => write!(f, "{i}"),
            CheckedValue::Float(v) => write!(f, "{v}"),
            CheckedValue::Double(v) => write!(f, "{v}"),
            CheckedValue::Bool(b) => write!(f, "{b}"),
            CheckedValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", rendered.join(","))
            }
        }
    }
}

/// Outcome of binding one declared field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOutcome {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: String,
    /// `None` when no source or environment variable provides a value.
    pub value: Option<CheckedValue>,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format merged settings, sorted by key.
    fn format_settings(&self, settings: &[SettingRow]) -> Result<String>;

    /// Format the effective value of one property.
    fn format_resolved(&self, resolved: &ResolvedOutput) -> Result<String>;

    /// Format the outcome of a `check` run.
    fn format_check(&self, outcomes: &[FieldOutcome]) -> Result<String>;

    /// Format a directory listing.
    fn format_files(&self, directory: &str, files: &[String]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Properties => Box::new(PropertiesFormatter),
    }
}
