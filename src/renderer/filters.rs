use log::warn;
use minijinja::Value;
use regex::Regex;

// Re-export all the case conversion and string manipulation functions
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        table::to_table_case, train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
    suffix::foreign_key::to_foreign_key,
};

/// Tests if a string matches a given regular expression pattern.
///
/// An invalid pattern never matches and is reported as a warning.
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// Serializes a value as indented JSON.
pub fn to_json_filter(value: Value) -> Result<String, minijinja::Error> {
    serde_json::to_string_pretty(&value).map_err(|e| {
        minijinja::Error::new(minijinja::ErrorKind::BadSerialization, "cannot serialize to JSON")
            .with_source(e)
    })
}

/// Serializes a value as YAML, without the trailing newline.
pub fn to_yaml_filter(value: Value) -> Result<String, minijinja::Error> {
    let yaml = serde_yaml::to_string(&value).map_err(|e| {
        minijinja::Error::new(minijinja::ErrorKind::BadSerialization, "cannot serialize to YAML")
            .with_source(e)
    })?;
    Ok(yaml.trim_end_matches('\n').to_string())
}
