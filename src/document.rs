//! Parsing of the input document.
//!
//! The input is read as YAML, which also accepts JSON, into a dynamically
//! typed tree that templates are rendered against.

use crate::error::Result;

/// Parsed input data: a mapping, sequence, scalar or null tree.
pub type Document = serde_yaml::Value;

/// Parses raw input bytes into a [`Document`].
///
/// # Arguments
/// * `raw` - The complete input, JSON or YAML
///
/// # Returns
/// * `Result<Document>` - The parsed tree, or a parse error carrying the
///   syntactic cause
pub fn parse(raw: &[u8]) -> Result<Document> {
    Ok(serde_yaml::from_slice(raw)?)
}
