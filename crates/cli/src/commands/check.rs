//! Check command implementation.
//!
//! Binds ad-hoc `NAME:TYPE` field declarations through a collecting writer,
//! so a properties setup can be validated without writing a Rust type for it.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use anyhow::{Context, Result};
use propbind_config::constants::REDACTED;
use propbind_config::{FieldDescriptor, FieldType, Value, WriteError};

use crate::commands::{print_output, should_mask};
use crate::error::CliError;
use crate::formatters::{CheckedValue, FieldOutcome, OutputFormat, get_formatter};
use crate::sources;

/// A `NAME:TYPE` field declaration. The name doubles as the property name.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    /// The type exactly as written, for display.
    pub type_text: String,
    pub field_type: FieldType,
}

impl FromStr for FieldSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, type_text) = s
            .split_once(':')
            .ok_or_else(|| format!("expected NAME:TYPE, got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing field name in '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            type_text: type_text.trim().to_string(),
            field_type: type_text.parse()?,
        })
    }
}

pub fn run(
    search_path: Option<&str>,
    sources: &[String],
    specs: &[FieldSpec],
    show_secrets: bool,
    output_format: &str,
) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    if let Some(name) = duplicate_name(specs) {
        return Err(CliError::DuplicateField(name.to_string()).into());
    }
    let context = sources::context(search_path, sources)?;

    let fields: Vec<FieldDescriptor> = specs
        .iter()
        .map(|spec| FieldDescriptor::new(&spec.name, &spec.name, spec.field_type.clone()))
        .collect();

    let mut collected: HashMap<String, Value> = HashMap::new();
    let mut writer = |field: &FieldDescriptor, value: Value| -> Result<(), WriteError> {
        collected.insert(field.name().to_string(), value);
        Ok(())
    };
    let report = context
        .bind(&fields, &mut writer)
        .context("Failed to bind declared fields")?;
    tracing::debug!(
        applied = report.applied.len(),
        defaulted = report.defaulted.len(),
        "Checked fields"
    );

    let outcomes: Vec<FieldOutcome> = specs
        .iter()
        .map(|spec| FieldOutcome {
            field: spec.name.clone(),
            field_type: spec.type_text.clone(),
            value: collected.get(&spec.name).cloned().map(|value| {
                if should_mask(&spec.name, show_secrets) {
                    CheckedValue::Text(REDACTED.to_string())
                } else {
                    value.into()
                }
            }),
        })
        .collect();

    print_output(&get_formatter(format).format_check(&outcomes)?);
    Ok(())
}

/// The first field name declared more than once.
fn duplicate_name(specs: &[FieldSpec]) -> Option<&str> {
    let mut seen = HashSet::new();
    specs
        .iter()
        .map(|spec| spec.name.as_str())
        .find(|name| !seen.insert(*name))
}
