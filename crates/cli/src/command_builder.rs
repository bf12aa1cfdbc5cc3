//! crates/cli/src/command_builder.rs
//! Clap command definition for `fmask`.

use clap::{Arg, ArgAction, Command as ClapCommand};
use logging::{Component, LogLevel};

/// Naming conventions accepted by `--naming`.
pub(crate) const NAMING_CHOICES: [&str; 4] = ["identity", "snake", "camel", "pascal"];

fn mask_text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .help("Mask in compact form, for example 'a,b{c,d}' or '!secret'.")
        .required(true)
        .action(ArgAction::Set)
}

fn path_list_arg(help: &'static str) -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .help(help)
        .required(true)
        .num_args(1..)
        .action(ArgAction::Append)
}

/// Parses `LEVEL` or `CRATE=LEVEL` for `--log-level`.
pub(crate) fn parse_level_override(value: &str) -> Result<(Option<Component>, LogLevel), String> {
    let (component, level) = match value.split_once('=') {
        Some((target, level)) => {
            let component = Component::from_target(target.trim()).ok_or_else(|| {
                let known: Vec<_> = Component::ALL.iter().map(|c| c.target()).collect();
                format!("unknown component '{target}' (expected {})", known.join(" or "))
            })?;
            (Some(component), level)
        }
        None => (None, value),
    };
    let level = level.trim().parse::<LogLevel>().map_err(|error| error.to_string())?;
    Ok((component, level))
}

pub(crate) fn clap_command(program_name: &'static str) -> ClapCommand {
    ClapCommand::new(program_name)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build, inspect, and evaluate field masks.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity; repeat for more detail.")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("N")
                .help("Reject masks nested deeper than N levels.")
                .value_parser(clap::value_parser!(usize))
                .action(ArgAction::Set)
                .global(true),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("DIRECTIVES")
                .help("Log filter directives such as 'info,fieldmask=trace'; overrides -v.")
                .action(ArgAction::Set)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("[CRATE=]LEVEL")
                .help("Set the level for every crate, or for 'fieldmask' or 'structcopy' only.")
                .value_parser(parse_level_override)
                .action(ArgAction::Append)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("parse")
                .about("Parse compact mask text and print its canonical form.")
                .arg(mask_text_arg())
                .arg(
                    Arg::new("invert")
                        .long("invert")
                        .help("Print the complement of the mask instead.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("paths")
                .about("Build a mask from dotted field paths and print it.")
                .arg(path_list_arg("Dotted field path, for example 'address.city'."))
                .arg(
                    Arg::new("naming")
                        .long("naming")
                        .value_name("STYLE")
                        .help("Naming convention applied to every path segment.")
                        .value_parser(NAMING_CHOICES)
                        .default_value("identity")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            ClapCommand::new("check")
                .about("Report whether each dotted path passes the mask.")
                .arg(mask_text_arg())
                .arg(path_list_arg("Dotted field path to evaluate.")),
        )
        .subcommand(
            ClapCommand::new("flatten")
                .about("Print the dotted paths a mask lists, one per line.")
                .arg(mask_text_arg()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        clap_command("fmask").debug_assert();
    }

    #[test]
    fn level_override_accepts_plain_and_scoped_levels() {
        assert_eq!(parse_level_override("debug"), Ok((None, LogLevel::Debug)));
        assert_eq!(
            parse_level_override("structcopy=TRACE"),
            Ok((Some(Component::Copy), LogLevel::Trace))
        );
    }

    #[test]
    fn level_override_rejects_unknown_names() {
        assert_eq!(
            parse_level_override("loud"),
            Err("unknown log level 'loud'".to_owned())
        );
        let err = parse_level_override("serde=info").unwrap_err();
        assert!(err.starts_with("unknown component 'serde'"), "{err}");
    }

    #[test]
    fn every_subcommand_is_registered() {
        let command = clap_command("fmask");
        let names: Vec<_> = command.get_subcommands().map(ClapCommand::get_name).collect();
        assert_eq!(names, ["parse", "paths", "check", "flatten"]);
    }
}
