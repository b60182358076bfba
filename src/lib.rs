/// Handles argument parsing and runs the pipeline.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Parsing of the input document.
pub mod document;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Beautification of the rendered output.
pub mod formatter;

/// A set of helpers for reading input and writing output.
pub mod ioutils;

/// Resolution of the template argument into a main template and sub-templates.
pub mod loader;

/// Template rendering functionality.
pub mod renderer;
