use std::fs;
use std::path::{Path, PathBuf};
use stencil::cli::{Args, Runner};
use stencil::error::Result;

/// Writes each `(file name, contents)` pair into `dir`.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}

/// Builds a `file://` template reference for `path`.
pub fn file_reference(path: PathBuf) -> String {
    format!("file://{}", path.display())
}

/// Runs the whole pipeline with `args` on `input` and returns what was written.
pub fn run_pipeline(args: Args, input: &str) -> Result<String> {
    let mut out = Vec::new();
    Runner::new(args).run_with(input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

/// Arguments with only the template set.
pub fn args_for(template: impl Into<String>) -> Args {
    Args {
        template: template.into(),
        json_beautify: false,
        beautify_yaml: false,
        color: false,
        strict: false,
        verbose: 0,
    }
}
