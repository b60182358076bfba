//! ANSI-colored JSON pretty printer.
//!
//! Lays out values exactly like `serde_json::to_string_pretty` and wraps each
//! token in a terminal style, so stripping the escape codes gives back the
//! plain indented form.

use crate::constants::JSON_INDENT;
use crate::error::{Error, Result};
use console::Style;
use serde_json::Value;

/// Styles used for each kind of JSON token.
#[derive(Debug, Clone)]
pub struct ColorFormatter {
    pub indent: usize,
    pub key: Style,
    pub string: Style,
    pub number: Style,
    pub boolean: Style,
    pub null: Style,
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self {
            indent: JSON_INDENT,
            key: Style::new().blue().bold().force_styling(true),
            string: Style::new().green().force_styling(true),
            number: Style::new().cyan().force_styling(true),
            boolean: Style::new().yellow().force_styling(true),
            null: Style::new().dim().force_styling(true),
        }
    }
}

impl ColorFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `value` as indented, colored JSON.
    pub fn to_string(&self, value: &Value) -> Result<String> {
        let mut out = String::new();
        self.write_value(&mut out, value, 0)?;
        Ok(out)
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => out.push_str(&self.null.apply_to("null").to_string()),
            Value::Bool(b) => out.push_str(&self.boolean.apply_to(b).to_string()),
            Value::Number(n) => out.push_str(&self.number.apply_to(n).to_string()),
            Value::String(s) => {
                out.push_str(&self.string.apply_to(quote(s)?).to_string())
            }
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    self.write_separator(out, i, depth + 1);
                    self.write_value(out, item, depth + 1)?;
                }
                self.write_newline(out, depth);
                out.push(']');
            }
            Value::Object(map) if map.is_empty() => out.push_str("{}"),
            Value::Object(map) => {
                out.push('{');
                for (i, (key, item)) in map.iter().enumerate() {
                    self.write_separator(out, i, depth + 1);
                    out.push_str(&self.key.apply_to(quote(key)?).to_string());
                    out.push_str(": ");
                    self.write_value(out, item, depth + 1)?;
                }
                self.write_newline(out, depth);
                out.push('}');
            }
        }
        Ok(())
    }

    fn write_separator(&self, out: &mut String, index: usize, depth: usize) {
        if index > 0 {
            out.push(',');
        }
        self.write_newline(out, depth);
    }

    fn write_newline(&self, out: &mut String, depth: usize) {
        out.push('\n');
        out.push_str(&" ".repeat(self.indent * depth));
    }
}

fn quote(s: &str) -> Result<String> {
    serde_json::to_string(s).map_err(Error::JsonMarshal)
}
