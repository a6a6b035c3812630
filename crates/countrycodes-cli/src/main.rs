use countrycodes_lib::cli::{apply_overrides, create_root_command, is_verbose};
use countrycodes_lib::commands::{dispatch_command, register_commands};
use countrycodes_lib::config::Settings;
use countrycodes_lib::errors::{handle_command_error, handle_fatal};

fn main() {
    // Step 1: Parse arguments
    let matches = register_commands(create_root_command()).get_matches();

    // Step 2: Settings from environment, then flag overrides
    let mut settings = Settings::from_env().unwrap_or_else(|e| {
        handle_command_error(&e);
        std::process::exit(1);
    });
    apply_overrides(&mut settings, &matches);

    // Step 3: Initialize Logger
    let verbose = is_verbose(&matches);
    countrycodes_lib::logger::init(settings.debug || verbose);
    countrycodes_lib::logger::set_verbose(verbose);
    tracing::debug!(
        resource = %settings.resource,
        duplicates = %settings.duplicates,
        "Settings resolved"
    );

    // Step 4: Dispatch to subcommand handler
    match matches.subcommand() {
        Some((name, sub_matches)) => {
            tracing::debug!(command = name, "Executing command");
            if let Err(e) = dispatch_command(name, sub_matches, &settings) {
                handle_command_error(&e);
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand: print help
            let mut cmd = register_commands(create_root_command());
            if let Err(e) = cmd.print_help() {
                handle_fatal(e.into());
            }
        }
    }
}
