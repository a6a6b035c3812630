pub mod count;
pub mod list;
pub mod lookup;
pub mod version;

use clap::{ArgMatches, Command};

use crate::config::Settings;
use crate::errors::{CountryCodeError, Result};

/// Attach every subcommand to the root command.
pub fn register_commands(root: Command) -> Command {
    root.subcommand(lookup::code_command())
        .subcommand(lookup::name_command())
        .subcommand(count::count_command())
        .subcommand(list::list_command())
        .subcommand(version::version_command())
}

/// Dispatch a parsed subcommand to its handler.
///
/// The table is loaded only for commands that read it, so `version` works even
/// when the configured resource is missing or broken.
pub fn dispatch_command(name: &str, matches: &ArgMatches, settings: &Settings) -> Result<()> {
    if name == "version" {
        return version::handle_version(matches);
    }

    let table = settings.load_table()?;
    match name {
        "code" => lookup::handle_code(matches, &table),
        "name" => lookup::handle_name(matches, &table),
        "count" => count::handle_count(matches, &table),
        "list" => list::handle_list(matches, &table),
        other => Err(CountryCodeError::Command(format!("unknown command: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::create_root_command;

    const EXPECTED_COMMANDS: &[&str] = &["code", "name", "count", "list", "version"];

    fn root() -> Command {
        register_commands(create_root_command())
    }

    #[test]
    fn test_register_commands() {
        let root = root();
        let registered: Vec<&str> = root.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(registered, EXPECTED_COMMANDS);
    }

    #[test]
    fn test_root_command_is_valid() {
        root().debug_assert();
    }

    #[test]
    fn test_global_flags_reach_subcommands() {
        let matches = root()
            .try_get_matches_from(["countrycodes", "count", "--json", "--strict"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "count");
        assert!(sub.get_flag("json"));
        assert!(sub.get_flag("strict"));
    }

    #[test]
    fn test_dispatch_count_with_bundled_table() {
        let matches = root()
            .try_get_matches_from(["countrycodes", "count"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert!(dispatch_command(name, sub, &Settings::default()).is_ok());
    }

    #[test]
    fn test_dispatch_version_skips_table() {
        let matches = root()
            .try_get_matches_from(["countrycodes", "version"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        let settings = Settings {
            resource: "missing.txt".to_string(),
            ..Settings::default()
        };
        assert!(dispatch_command(name, sub, &settings).is_ok());
    }

    #[test]
    fn test_dispatch_missing_resource() {
        let matches = root()
            .try_get_matches_from(["countrycodes", "code", "CAN"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        let settings = Settings {
            resource: "missing.txt".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            dispatch_command(name, sub, &settings),
            Err(CountryCodeError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_dispatch_lookup_miss_is_error() {
        let matches = root()
            .try_get_matches_from(["countrycodes", "code", "ZZZ"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert!(matches!(
            dispatch_command(name, sub, &Settings::default()),
            Err(CountryCodeError::Command(_))
        ));
    }
}
