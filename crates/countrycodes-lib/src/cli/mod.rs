use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::config::Settings;
use crate::table::DuplicatePolicy;

/// Creates the root clap Command with the global flags shared by every subcommand.
///
/// `--resource`, `--resource-dir` and `--strict` override the matching
/// `COUNTRYCODES_*` environment variables.
pub fn create_root_command() -> Command {
    Command::new("countrycodes")
        .about("Look up ISO 3166-1 alpha-3 country codes and names")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output in JSON format"),
        )
        .arg(
            Arg::new("resource")
                .long("resource")
                .global(true)
                .value_name("NAME")
                .help("Name of the table resource to load"),
        )
        .arg(
            Arg::new("resource-dir")
                .long("resource-dir")
                .global(true)
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory searched for the resource before the bundled data"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Fail on duplicate country names or codes"),
        )
}

/// Returns whether verbose mode is active based on parsed matches.
///
/// Verbose is suppressed when `--json` is also set, to keep JSON output clean.
pub fn is_verbose(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose") && !is_json(matches)
}

pub fn is_json(matches: &ArgMatches) -> bool {
    matches.get_flag("json")
}

/// Apply command-line overrides on top of environment settings.
pub fn apply_overrides(settings: &mut Settings, matches: &ArgMatches) {
    if let Some(resource) = matches.get_one::<String>("resource") {
        settings.resource = resource.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("resource-dir") {
        settings.resource_dir = Some(dir.clone());
    }
    if matches.get_flag("strict") {
        settings.duplicates = DuplicatePolicy::Reject;
    }
}
