//! `code` and `name` commands: look up country names by code and codes by name.
//!
//! Each argument is looked up independently. Plain output prints one line per
//! query and fails the command if any query found nothing; `--json` prints
//! every query with a nullable result and always succeeds.

use clap::{Arg, ArgMatches, Command};
use serde::Serialize;

use crate::cli::is_json;
use crate::errors::{CountryCodeError, Result};
use crate::table::CodeTable;
use crate::{json, output};

/// One query and what the table returned for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup<'a> {
    pub query: &'a str,
    pub result: Option<&'a str>,
}

/// Build the `code` clap command.
pub fn code_command() -> Command {
    Command::new("code")
        .aliases(["c"])
        .about("Look up country names by ISO alpha-3 code")
        .arg(
            Arg::new("codes")
                .num_args(1..)
                .required(true)
                .value_name("CODE")
                .help("Alpha-3 codes, in any case"),
        )
}

/// Build the `name` clap command.
pub fn name_command() -> Command {
    Command::new("name")
        .aliases(["n"])
        .about("Look up ISO alpha-3 codes by country name")
        .arg(
            Arg::new("names")
                .num_args(1..)
                .required(true)
                .value_name("NAME")
                .help("Country names, exactly as listed (quote names with spaces)"),
        )
}

pub fn lookup_codes<'a>(table: &'a CodeTable, codes: &'a [String]) -> Vec<Lookup<'a>> {
    codes
        .iter()
        .map(|code| Lookup {
            query: code,
            result: table.from_country_code(code),
        })
        .collect()
}

pub fn lookup_names<'a>(table: &'a CodeTable, names: &'a [String]) -> Vec<Lookup<'a>> {
    names
        .iter()
        .map(|name| Lookup {
            query: name,
            result: table.from_country(name),
        })
        .collect()
}

/// Handle the `code` command.
pub fn handle_code(matches: &ArgMatches, table: &CodeTable) -> Result<()> {
    let codes = values(matches, "codes");
    report(&lookup_codes(table, &codes), "code", is_json(matches))
}

/// Handle the `name` command.
pub fn handle_name(matches: &ArgMatches, table: &CodeTable) -> Result<()> {
    let names = values(matches, "names");
    report(&lookup_names(table, &names), "name", is_json(matches))
}

fn values(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .unwrap_or_default()
        .cloned()
        .collect()
}

fn report(hits: &[Lookup<'_>], kind: &str, as_json: bool) -> Result<()> {
    if as_json {
        return json::print(&hits);
    }

    let single = hits.len() == 1;
    let mut missing = 0;
    for hit in hits {
        match hit.result {
            Some(result) if single => println!("{}", result),
            Some(result) => println!("{}: {}", hit.query, result),
            None => {
                missing += 1;
                output::warning(&format!("No match for {} {:?}", kind, hit.query));
            }
        }
    }

    if missing > 0 {
        return Err(CountryCodeError::Command(format!(
            "{} of {} {} lookups found nothing",
            missing,
            hits.len(),
            kind
        )));
    }
    Ok(())
}
