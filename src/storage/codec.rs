//! Format-polymorphic encoding of the expense collection
//!
//! One `Format` value selects between the JSON and YAML codecs; call sites
//! never compare format strings themselves.

use std::fmt;

use clap::ValueEnum;

use crate::error::SpendlogResult;
use crate::models::Expense;

/// On-disk text format for the expense collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable indented array of objects
    Json,
    /// Block-style document with the same field set
    Yaml,
}

impl Format {
    /// Parse a user-supplied format name ("json", "yaml", "yml")
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Encode a sequence of expenses as text in the given format
pub fn encode(expenses: &[Expense], format: Format) -> SpendlogResult<String> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(expenses)?,
        Format::Yaml => serde_yaml::to_string(expenses)?,
    };
    Ok(text)
}

/// Decode text in the given format back into expenses
///
/// Fails with a decode error when the text is not valid for the format or is
/// missing required fields; there is no partial parse.
pub fn decode(text: &str, format: Format) -> SpendlogResult<Vec<Expense>> {
    let expenses = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(expenses)
}
