//! Version CLI command — display application version.

use clap::{ArgMatches, Command};
use serde::Serialize;

use crate::cli::is_json;
use crate::errors::Result;
use crate::json;

#[derive(Debug, Serialize)]
struct VersionOutput {
    name: &'static str,
    version: &'static str,
}

/// Build the `version` clap command.
pub fn version_command() -> Command {
    Command::new("version").about("Show version information")
}

/// Handle the `version` command.
pub fn handle_version(matches: &ArgMatches) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if is_json(matches) {
        json::print(&VersionOutput {
            name: "countrycodes",
            version,
        })
    } else {
        println!("countrycodes version {}", version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_command_parses() {
        assert!(version_command().try_get_matches_from(["version"]).is_ok());
    }

    #[test]
    fn test_version_output_json() {
        let out = json::serialize(&VersionOutput {
            name: "countrycodes",
            version: "1.2.3",
        })
        .unwrap();
        assert_eq!(out, r#"{"name":"countrycodes","version":"1.2.3"}"#);
    }
}
