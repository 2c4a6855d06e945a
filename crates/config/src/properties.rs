//! Line-oriented `key=value` properties documents.
//!
//! Responsibilities:
//! - Parse a properties stream into ordered key/value pairs.
//! - Handle comments, separators, line continuations and escapes.
//!
//! Does NOT handle:
//! - Merging several documents (see `merge.rs`).
//! - Variable interpolation; values are taken verbatim.
//!
//! Invariants:
//! - Pairs are returned in document order; duplicate keys are kept so the
//!   caller's last-write-wins merge decides.
//! - Trailing whitespace of a value is preserved.

use std::io::{self, Read};
use thiserror::Error;

use crate::error::ConfigError;

/// Errors raised while reading a properties document.
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}

impl PropertiesError {
    /// Attribute this error to the named source.
    pub fn into_config_error(self, name: &str) -> ConfigError {
        match self {
            PropertiesError::Io(source) => ConfigError::SourceRead {
                name: name.to_string(),
                source,
            },
            PropertiesError::Malformed { line, message } => ConfigError::SourceParse {
                name: name.to_string(),
                line,
                message,
            },
        }
    }
}

/// Parse a properties document from `reader`.
///
/// The stream must be UTF-8; anything else is reported as an I/O error.
pub fn parse_properties<R: Read>(mut reader: R) -> Result<Vec<(String, String)>, PropertiesError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_str(&content)
}

/// Parse a properties document that is already in memory.
pub fn parse_str(content: &str) -> Result<Vec<(String, String)>, PropertiesError> {
    let mut entries = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let entry = split_entry(&logical).map_err(|message| PropertiesError::Malformed {
            line: index + 1,
            message,
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

/// A line continues when it ends with an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(logical: &str) -> Result<(String, String), String> {
    let chars: Vec<char> = logical.chars().collect();

    let mut key_end = chars.len();
    let mut escaped = false;
    for (i, &c) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            break;
        }
    }

    let mut value_start = key_end;
    while value_start < chars.len() && is_blank(chars[value_start]) {
        value_start += 1;
    }
    if value_start < chars.len() && matches!(chars[value_start], '=' | ':') {
        value_start += 1;
        while value_start < chars.len() && is_blank(chars[value_start]) {
            value_start += 1;
        }
    }

    let key = unescape(&chars[..key_end])?;
    let value = unescape(&chars[value_start..])?;
    Ok((key, value))
}

fn unescape(chars: &[char]) -> Result<String, String> {
    let mut out = String::with_capacity(chars.len());
    let mut iter = chars.iter().copied();

    while let Some(c) = iter.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match iter.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => out.push(unicode_escape(&mut iter)?),
            Some(other) => out.push(other),
            // A lone trailing backslash is dropped.
            None => {}
        }
    }

    Ok(out)
}

fn unicode_escape(iter: &mut impl Iterator<Item = char>) -> Result<char, String> {
    let unit = hex_unit(iter)?;
    if !(0xD800..=0xDBFF).contains(&unit) {
        return char::from_u32(unit).ok_or_else(malformed_unicode);
    }

    // High surrogate: the low half must follow as another \u escape.
    if iter.next() != Some('\\') || iter.next() != Some('u') {
        return Err(malformed_unicode());
    }
    let low = hex_unit(iter)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return Err(malformed_unicode());
    }
    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(combined).ok_or_else(malformed_unicode)
}

fn hex_unit(iter: &mut impl Iterator<Item = char>) -> Result<u32, String> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let digit = iter
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(malformed_unicode)?;
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

fn malformed_unicode() -> String {
    "malformed \\uxxxx encoding".to_string()
}
