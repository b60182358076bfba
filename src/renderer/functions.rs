//! The fixed set of functions and filters exposed to templates.

use super::filters::*;
use crate::constants::MAX_RENDER_DEPTH;
use minijinja::value::ValueKind;
use minijinja::{context, Environment, Error, ErrorKind, State, Value};
use std::cell::Cell;

/// A set of functions and filters installed into every rendering environment.
pub trait FunctionRegistry {
    /// Registers the functions and filters with `env`.
    fn install(&self, env: &mut Environment<'_>);
}

/// Functions and filters available to every template.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFunctions;

impl FunctionRegistry for BuiltinFunctions {
    fn install(&self, env: &mut Environment<'_>) {
        env.add_function("render", render_function);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("table_case", to_table_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("plural", to_plural);
        env.add_filter("singular", to_singular);
        env.add_filter("foreign_key", to_foreign_key);
        env.add_filter("regex", regex_filter);
        env.add_filter("to_json", to_json_filter);
        env.add_filter("to_yaml", to_yaml_filter);
    }
}

thread_local! {
    static RENDER_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Builds the root context for rendering `value`.
///
/// The whole value is reachable as `this`; the keys of a mapping are also
/// top-level variables.
pub fn data_context(value: Value) -> Value {
    if value.kind() == ValueKind::Map {
        context! { this => value.clone(), ..value }
    } else {
        context! { this => value }
    }
}

/// `render(name, value)`: renders the named sub-template with `value` as data.
pub fn render_function(state: &State, name: &str, value: Value) -> Result<Value, Error> {
    let depth = RENDER_DEPTH.with(Cell::get);
    if depth >= MAX_RENDER_DEPTH {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("render() nested deeper than {MAX_RENDER_DEPTH} levels at '{name}'"),
        ));
    }

    let template = state.env().get_template(name)?;
    RENDER_DEPTH.with(|d| d.set(depth + 1));
    let rendered = template.render(data_context(value));
    RENDER_DEPTH.with(|d| d.set(depth));

    Ok(Value::from_safe_string(rendered?))
}
