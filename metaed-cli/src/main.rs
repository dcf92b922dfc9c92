//! metaed CLI
//!
//! Command-line interface for checking, formatting and inspecting game
//! metadata files.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    }
}

/// Dispatch a command. `Ok(false)` means it ran but the result should fail
/// the process (e.g. `check --strict` found issues).
fn run(cli: Cli) -> Result<bool, CliError> {
    let settings = metaed_lib::Settings::load();

    match cli.command {
        Commands::Check {
            files,
            require_title,
            strict,
            max_issues,
        } => {
            let clean = commands::check::run_check(&files, require_title, max_issues);
            Ok(clean || !strict)
        }
        Commands::Fmt {
            files,
            write,
            check,
            force,
        } => commands::fmt::run_fmt(&files, write, check, force),
        Commands::Show { file, json } => {
            commands::show::run_show(&file, json)?;
            Ok(true)
        }
        Commands::Roots => {
            commands::roots::run_roots(cli.root, &settings);
            Ok(true)
        }
        Commands::Scan { max_depth } => {
            commands::scan::run_scan(cli.root, &settings, max_depth);
            Ok(true)
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(),
                ConfigAction::Path => commands::config::run_config_path(),
                ConfigAction::AddRoot { path } => commands::config::run_config_add_root(&path)?,
                ConfigAction::RemoveRoot { path } => {
                    commands::config::run_config_remove_root(&path)?
                }
            }
            Ok(true)
        }
    }
}
