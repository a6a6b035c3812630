//! `count` command: number of countries in the loaded table.

use clap::{ArgMatches, Command};
use serde::Serialize;

use crate::cli::is_json;
use crate::errors::Result;
use crate::json;
use crate::table::CodeTable;

#[derive(Debug, Serialize)]
struct CountOutput {
    countries: usize,
}

/// Build the `count` clap command.
pub fn count_command() -> Command {
    Command::new("count").about("Show how many countries the table holds")
}

/// Handle the `count` command.
pub fn handle_count(matches: &ArgMatches, table: &CodeTable) -> Result<()> {
    let countries = table.num_countries();
    if is_json(matches) {
        json::print(&CountOutput { countries })
    } else {
        println!("{}", countries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_command_parses() {
        assert!(count_command().try_get_matches_from(["count"]).is_ok());
        assert!(count_command()
            .try_get_matches_from(["count", "extra"])
            .is_err());
    }

    #[test]
    fn test_count_output_json_shape() {
        let out = json::serialize(&CountOutput { countries: 249 }).unwrap();
        assert_eq!(out, r#"{"countries":249}"#);
    }
}
