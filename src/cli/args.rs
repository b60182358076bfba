use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const AFTER_HELP: &str = r#"Examples:
  echo '{"name": "demo"}' | stencil -t 'hello {{ name }}'
  cat data.yaml | stencil -t file://templates/main.j2 -j -c
"#;

/// CLI arguments for stencil.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Template body, or `file://<path>` to load it from a file. Other files
    /// next to it become sub-templates named after their file name without
    /// the extension.
    #[arg(
        short,
        long,
        value_name = "TEMPLATE",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub template: String,

    /// Beautify the output as JSON.
    #[arg(short = 'j', long = "json-beautify")]
    pub json_beautify: bool,

    /// Beautify the output as YAML.
    #[arg(short = 'y', long = "beautify-yaml")]
    pub beautify_yaml: bool,

    /// Colorize the output (with `--json-beautify`).
    #[arg(short, long)]
    pub color: bool,

    /// Fail when the template uses an undefined variable.
    #[arg(short, long)]
    pub strict: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Whether a parse error means no usable template was given.
fn is_missing_template(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::MissingRequiredArgument | ErrorKind::InvalidValue)
}

/// Parse command line arguments, printing the help text when the template is
/// missing or empty.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if is_missing_template(e.kind()) {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["stencil", "--template", "hello {{ name }}"]);
        assert_eq!(args.template, "hello {{ name }}");
        assert!(!args.json_beautify);
        assert!(!args.beautify_yaml);
        assert!(!args.color);
        assert!(!args.strict);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_short_flags() {
        let args = Args::parse_from(["stencil", "-t", "file://t/main.j2", "-j", "-y", "-c", "-s", "-vv"]);
        assert_eq!(args.template, "file://t/main.j2");
        assert!(args.json_beautify);
        assert!(args.beautify_yaml);
        assert!(args.color);
        assert!(args.strict);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn parses_long_flags() {
        let args = Args::parse_from([
            "stencil",
            "--template=x",
            "--json-beautify",
            "--beautify-yaml",
            "--color",
            "--strict",
        ]);
        assert!(args.json_beautify && args.beautify_yaml && args.color && args.strict);
    }

    #[test]
    fn template_is_required() {
        let err = Args::try_parse_from(["stencil", "-j"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(is_missing_template(err.kind()));
    }

    #[test]
    fn empty_template_is_rejected() {
        let err = Args::try_parse_from(["stencil", "-t", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(is_missing_template(err.kind()));

        let err = Args::try_parse_from(["stencil", "--template="]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }
}
