//! crates/cli/src/execution.rs
//! Runs a parsed subcommand against the mask library.

use std::io::{self, Write};

use fieldmask::{FormatError, Mask, ParseOptions};
use logging::{Component, InitError, LogConfig, init_tracing};
use thiserror::Error;

use crate::arguments::{Action, ParsedArgs};
use crate::{EXIT_FAILURE, EXIT_OK, EXIT_USAGE, PROGRAM_NAME};

/// Failures while running a subcommand.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("invalid mask: {0}")]
    Format(#[from] FormatError),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

pub(crate) fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    match init_tracing(&log_config(&parsed)) {
        Ok(()) | Err(InitError::AlreadyInstalled(_)) => {}
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            return EXIT_USAGE;
        }
    }

    let options = parsed
        .max_depth
        .map_or_else(ParseOptions::new, |max_depth| {
            ParseOptions::new().with_max_depth(max_depth)
        });
    let command = parsed.action.name();

    match run_action(parsed.action, &options, stdout) {
        Ok(()) => {
            tracing::info!(target: "cli", command, "command_finished");
            EXIT_OK
        }
        Err(error) => {
            tracing::debug!(target: "cli", command, error = %error, "command_failed");
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            EXIT_FAILURE
        }
    }
}

/// `-v` sets the starting levels, `--log-level` adjusts them in order, and
/// `--log` directives replace the result.
pub(crate) fn log_config(parsed: &ParsedArgs) -> LogConfig {
    let mut config = LogConfig::from_verbose_level(parsed.verbosity);
    for &(component, level) in &parsed.log_levels {
        match component {
            Some(component) => config.apply_component(component, level),
            None => {
                config.base = level;
                for component in Component::ALL {
                    config.apply_component(component, level);
                }
            }
        }
    }
    match parsed.log.as_deref() {
        Some(directives) => config.with_directives(directives),
        None => config,
    }
}

fn run_action<Out: Write>(
    action: Action,
    options: &ParseOptions,
    stdout: &mut Out,
) -> Result<(), CliError> {
    match action {
        Action::Parse { text, invert } => {
            let mask = Mask::parse_with(&text, options)?;
            let mask = if invert { mask.invert() } else { mask };
            writeln!(stdout, "{mask}")?;
        }
        Action::Paths { paths, naming } => {
            let mask = Mask::from_paths_with(&paths, &options.with_naming(naming))?;
            writeln!(stdout, "{mask}")?;
        }
        Action::Check { text, paths } => {
            let mask = Mask::parse_with(&text, options)?;
            for path in &paths {
                let verdict = if mask.contains_path(path) {
                    "included"
                } else {
                    "excluded"
                };
                writeln!(stdout, "{verdict}\t{path}")?;
            }
        }
        Action::Flatten { text } => {
            let mask = Mask::parse_with(&text, options)?;
            for path in mask.paths() {
                writeln!(stdout, "{path}")?;
            }
        }
    }
    stdout.flush()?;
    Ok(())
}
