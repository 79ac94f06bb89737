//! Console front end for the Roster people table.
//!
//! # Responsibility
//! - Wire environment config, logging and the process ID sequence into one
//!   interactive session.

mod app;
mod command;
mod config;
mod render;

use config::CliConfig;
use roster_core::{init_logging, process_ids, PersonTable};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("roster: file logging disabled: {err}");
        }
    }

    let table = PersonTable::with_seed(process_ids());
    let stdin = io::stdin();
    let stdout = io::stdout();
    match app::run(table, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roster: {err}");
            ExitCode::FAILURE
        }
    }
}
