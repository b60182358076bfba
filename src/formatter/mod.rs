//! Post-processing of rendered text into the requested output encoding.

pub mod color;

pub use color::ColorFormatter;

use crate::error::{Error, Result};
use log::debug;

/// Requested beautification of the rendered text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Re-emit the text as indented JSON
    pub json: bool,
    /// Re-emit the text as YAML
    pub yaml: bool,
    /// Colorize JSON output
    pub color: bool,
}

/// Turns rendered text into the final output bytes.
///
/// Both beautifiers read the original `text`. JSON runs first and YAML
/// second, so with both requested the JSON text is validated but the YAML
/// form is what gets returned. Without any flag the text passes through
/// untouched.
pub fn format(text: &str, options: FormatOptions) -> Result<Vec<u8>> {
    let mut output = text.as_bytes().to_vec();

    if options.json {
        debug!("Beautifying output as JSON (color: {})", options.color);
        output = beautify_json(text, options.color)?.into_bytes();
    } else if options.color {
        debug!("Ignoring color: it only applies to JSON output");
    }

    if options.yaml {
        debug!("Beautifying output as YAML");
        output = beautify_yaml(text)?.into_bytes();
    }

    Ok(output)
}

/// Parses `text` as strict JSON and prints it with two-space indentation.
pub fn beautify_json(text: &str, color: bool) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(Error::InvalidJsonOutput)?;
    if color {
        ColorFormatter::new().to_string(&value)
    } else {
        serde_json::to_string_pretty(&value).map_err(Error::JsonMarshal)
    }
}

/// Parses `text` as YAML and prints it back in canonical block style, with
/// mapping keys sorted.
pub fn beautify_yaml(text: &str) -> Result<String> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(Error::InvalidYamlOutput)?;
    serde_yaml::to_string(&sort_mappings(value)).map_err(Error::YamlMarshal)
}

/// Recursively orders mapping entries by key.
///
/// Keys are compared by their YAML rendering, so `2` sorts before `b`
/// whatever their type.
fn sort_mappings(value: serde_yaml::Value) -> serde_yaml::Value {
    use serde_yaml::{value::TaggedValue, Mapping, Value};

    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(String, Value, Value)> = mapping
                .into_iter()
                .map(|(key, value)| (sort_key(&key), key, sort_mappings(value)))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Mapping(
                entries
                    .into_iter()
                    .map(|(_, key, value)| (key, value))
                    .collect::<Mapping>(),
            )
        }
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(sort_mappings).collect()),
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            Value::Tagged(Box::new(TaggedValue { tag, value: sort_mappings(value) }))
        }
        scalar => scalar,
    }
}

fn sort_key(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn passthrough_without_flags() {
        let text = "not json: [ at all \n\t";
        let once = format(text, FormatOptions::default()).unwrap();
        assert_eq!(once, text.as_bytes());
        let twice = format(&as_string(once), FormatOptions::default()).unwrap();
        assert_eq!(twice, text.as_bytes());
    }

    #[test]
    fn beautifies_json() {
        let options = FormatOptions { json: true, ..Default::default() };
        let output = format(r#"{"d1":"bar"}"#, options).unwrap();
        assert_eq!(as_string(output), "{\n  \"d1\": \"bar\"\n}");
    }

    #[test]
    fn beautifies_nested_json() {
        let options = FormatOptions { json: true, ..Default::default() };
        let output = format(r#"{"b":[1,{"c":null}],"a":true}"#, options).unwrap();
        assert_eq!(
            as_string(output),
            "{\n  \"a\": true,\n  \"b\": [\n    1,\n    {\n      \"c\": null\n    }\n  ]\n}"
        );
    }

    #[test]
    fn colorized_json_matches_plain_layout() {
        let options = FormatOptions { json: true, color: true, ..Default::default() };
        let output = as_string(format(r#"{"d1":"bar"}"#, options).unwrap());
        assert!(output.contains("\u{1b}["));
        assert_eq!(console::strip_ansi_codes(&output), "{\n  \"d1\": \"bar\"\n}");
    }

    #[test]
    fn color_alone_is_passthrough() {
        let options = FormatOptions { color: true, ..Default::default() };
        assert_eq!(format("plain", options).unwrap(), b"plain");
    }

    #[test]
    fn rejects_invalid_json() {
        let options = FormatOptions { json: true, ..Default::default() };
        let err = format("d1: bar", options).unwrap_err();
        assert!(matches!(err, Error::InvalidJsonOutput(_)));
    }

    #[test]
    fn beautifies_yaml() {
        let options = FormatOptions { yaml: true, ..Default::default() };
        assert_eq!(as_string(format("d1: bar", options).unwrap()), "d1: bar\n");
    }

    #[test]
    fn beautifies_json_text_as_yaml() {
        let options = FormatOptions { yaml: true, ..Default::default() };
        let output = format(r#"{"name": "demo", "tags": ["a", "b"]}"#, options).unwrap();
        assert_eq!(as_string(output), "name: demo\ntags:\n- a\n- b\n");
    }

    #[test]
    fn yaml_keys_are_sorted_at_every_level() {
        let options = FormatOptions { yaml: true, ..Default::default() };
        let output = format("b: 1\na: {d: 1, c: 2}\nl: [{z: 0, y: 1}]", options).unwrap();
        assert_eq!(as_string(output), "a:\n  c: 2\n  d: 1\nb: 1\nl:\n- y: 1\n  z: 0\n");
    }

    #[test]
    fn rejects_invalid_yaml() {
        let options = FormatOptions { yaml: true, ..Default::default() };
        let err = format("key: [unclosed", options).unwrap_err();
        assert!(matches!(err, Error::InvalidYamlOutput(_)));
    }

    #[test]
    fn yaml_wins_when_both_flags_set() {
        let options = FormatOptions { json: true, yaml: true, color: false };
        let output = format(r#"{"d1":"bar"}"#, options).unwrap();
        assert_eq!(as_string(output), "d1: bar\n");
    }

    #[test]
    fn json_still_validated_when_both_flags_set() {
        let options = FormatOptions { json: true, yaml: true, color: false };
        let err = format("d1: bar", options).unwrap_err();
        assert!(matches!(err, Error::InvalidJsonOutput(_)));
    }
}
