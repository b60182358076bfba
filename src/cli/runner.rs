use crate::{
    cli::Args,
    document::parse,
    error::Result,
    formatter::{format, FormatOptions},
    ioutils::{read_from, write_output},
    loader::resolve,
    renderer::{render_with, BuiltinFunctions, RenderOptions},
};
use std::io::{Read, Write};

/// Main CLI runner that wires the rendering pipeline together
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs the pipeline on the process's standard streams
    pub fn run(self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Runs the pipeline reading the document from `input` and writing to `output`.
    ///
    /// Nothing is written unless every stage succeeds.
    pub fn run_with(&self, input: impl Read, output: impl Write) -> Result<()> {
        let (template, sub_templates) = resolve(&self.args.template)?;
        log::info!("Template resolved with {} sub-template(s)", sub_templates.len());

        let raw = read_from(input)?;
        let document = parse(&raw)?;
        log::info!("Parsed {} bytes of input", raw.len());

        let rendered = render_with(
            &template,
            &sub_templates,
            &document,
            &BuiltinFunctions,
            self.render_options(),
        )?;
        log::info!("Rendered {} bytes", rendered.len());

        let formatted = format(&rendered, self.format_options())?;
        write_output(output, &formatted)
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions { strict: self.args.strict }
    }

    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            json: self.args.json_beautify,
            yaml: self.args.beautify_yaml,
            color: self.args.color,
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;

    fn run_args(argv: &[&str], input: &str) -> Result<String> {
        let mut full = vec!["stencil"];
        full.extend_from_slice(argv);
        let runner = Runner::new(Args::parse_from(full));
        let mut out = Vec::new();
        runner.run_with(input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn renders_inline_template() {
        let out = run_args(&["-t", "hello {{ name }}"], r#"{"name": "world"}"#).unwrap();
        assert_eq!(out, "hello world\n");
    }

    #[test]
    fn maps_flags_to_options() {
        let runner = Runner::new(Args::parse_from(["stencil", "-t", "x", "-j", "-c", "-s"]));
        assert_eq!(
            runner.format_options(),
            FormatOptions { json: true, yaml: false, color: true }
        );
        assert_eq!(runner.render_options(), RenderOptions { strict: true });
    }

    #[test]
    fn writes_nothing_on_format_error() {
        let runner = Runner::new(Args::parse_from(["stencil", "-t", "{{ name }}", "-j"]));
        let mut out = Vec::new();
        assert!(runner.run_with(r#"{"name": "not json"}"#.as_bytes(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn writes_nothing_on_parse_error() {
        let runner = Runner::new(Args::parse_from(["stencil", "-t", "{{ data }}"]));
        let mut out = Vec::new();
        let err = runner.run_with(r#"{"data": "bar"#.as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, Error::InputParse(_)));
        assert!(out.is_empty());
    }
}
