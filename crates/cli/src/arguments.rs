//! crates/cli/src/arguments.rs
//! Conversion of clap matches into typed arguments.

use std::ffi::OsString;

use clap::ArgMatches;
use clap::error::ErrorKind;
use fieldmask::NameStyle;
use logging::{Component, LogLevel};

use crate::PROGRAM_NAME;
use crate::command_builder::clap_command;

/// Arguments after validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) verbosity: u8,
    pub(crate) max_depth: Option<usize>,
    pub(crate) log: Option<String>,
    pub(crate) log_levels: Vec<(Option<Component>, LogLevel)>,
    pub(crate) action: Action,
}

/// Subcommand to run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    Parse { text: String, invert: bool },
    Paths { paths: Vec<String>, naming: NameStyle },
    Check { text: String, paths: Vec<String> },
    Flatten { text: String },
}

impl Action {
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Paths { .. } => "paths",
            Self::Check { .. } => "check",
            Self::Flatten { .. } => "flatten",
        }
    }
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command(PROGRAM_NAME).try_get_matches_from(args)?;
    let verbosity = matches.get_count("verbose");
    let max_depth = matches.get_one::<usize>("max-depth").copied();
    let log = matches.remove_one::<String>("log");
    let log_levels = matches
        .remove_many::<(Option<Component>, LogLevel)>("log-level")
        .map(Iterator::collect)
        .unwrap_or_default();

    let Some((name, mut sub)) = matches.remove_subcommand() else {
        return Err(clap_command(PROGRAM_NAME)
            .error(ErrorKind::MissingSubcommand, "a subcommand is required"));
    };
    let action = match name.as_str() {
        "parse" => Action::Parse {
            text: take_string(&mut sub, "text"),
            invert: sub.get_flag("invert"),
        },
        "paths" => Action::Paths {
            paths: take_strings(&mut sub, "paths"),
            naming: sub
                .get_one::<String>("naming")
                .and_then(|name| NameStyle::from_name(name))
                .unwrap_or(NameStyle::Identity),
        },
        "check" => Action::Check {
            text: take_string(&mut sub, "text"),
            paths: take_strings(&mut sub, "paths"),
        },
        "flatten" => Action::Flatten {
            text: take_string(&mut sub, "text"),
        },
        other => {
            return Err(clap_command(PROGRAM_NAME).error(
                ErrorKind::InvalidSubcommand,
                format!("unrecognized subcommand '{other}'"),
            ));
        }
    };

    Ok(ParsedArgs {
        verbosity,
        max_depth,
        log,
        log_levels,
        action,
    })
}

fn take_string(matches: &mut ArgMatches, id: &str) -> String {
    matches.remove_one::<String>(id).unwrap_or_default()
}

fn take_strings(matches: &mut ArgMatches, id: &str) -> Vec<String> {
    matches
        .remove_many::<String>(id)
        .map(Iterator::collect)
        .unwrap_or_default()
}
