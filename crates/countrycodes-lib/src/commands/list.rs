//! `list` command: print every country in the table, sorted by name.

use clap::{Arg, ArgMatches, Command};

use crate::cli::is_json;
use crate::errors::Result;
use crate::table::{CodeTable, Record};
use crate::{json, logger, output};

/// Build the `list` clap command.
pub fn list_command() -> Command {
    Command::new("list")
        .aliases(["ls"])
        .about("List every country and its alpha-3 code")
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .value_name("TEXT")
                .help("Only show countries whose name or code contains TEXT (case-insensitive)"),
        )
}

/// Records sorted by name, optionally narrowed to those matching `filter`.
pub fn filter_records(table: &CodeTable, filter: Option<&str>) -> Vec<Record> {
    let needle = filter.map(str::to_lowercase);
    table
        .records()
        .into_iter()
        .filter(|r| match &needle {
            Some(n) => r.name.to_lowercase().contains(n) || r.code.to_lowercase().contains(n),
            None => true,
        })
        .collect()
}

/// Handle the `list` command.
pub fn handle_list(matches: &ArgMatches, table: &CodeTable) -> Result<()> {
    let filter = matches.get_one::<String>("filter").map(String::as_str);
    let records = filter_records(table, filter);

    if is_json(matches) {
        return json::print(&records);
    }

    for record in &records {
        println!("{}", output::format_row(&record.code, &record.name));
    }
    if logger::is_verbose() {
        output::info(&format!(
            "{} of {} countries shown",
            records.len(),
            table.num_countries()
        ));
    }
    Ok(())
}
