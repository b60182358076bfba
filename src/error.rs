use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("unable to read input: {0}")]
    InputRead(std::io::Error),

    #[error("unable to parse input: {0}")]
    InputParse(#[from] serde_yaml::Error),

    #[error("error loading template: '{path}' does not exist")]
    TemplateNotFound { path: PathBuf },

    #[error("error loading template: cannot read '{path}': {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error loading template: cannot list directory '{dir}': {source}")]
    TemplateDirectory {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Two sibling files map to the same sub-template name once their
    /// extensions are stripped.
    #[error(
        "error loading template: sub-template '{name}' is defined by both '{first}' and '{second}'"
    )]
    DuplicateSubTemplate { name: String, first: PathBuf, second: PathBuf },

    #[error("{0}")]
    Render(#[from] minijinja::Error),

    #[error("output string is not valid JSON: {0}")]
    InvalidJsonOutput(#[source] serde_json::Error),

    #[error("could not marshal valid JSON: {0}")]
    JsonMarshal(#[source] serde_json::Error),

    #[error("output string is not valid YAML: {0}")]
    InvalidYamlOutput(#[source] serde_yaml::Error),

    #[error("could not marshal valid YAML: {0}")]
    YamlMarshal(#[source] serde_yaml::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints `ERROR: <message>` to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("ERROR: {err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
