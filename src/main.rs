//! ohsdk - unattended SDK installer
//!
//! Provisions a versioned, multi-component SDK on the local machine without
//! manual interaction, accepting licenses when they block the install.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod hash;
mod logging;
mod operations;
mod progress;
mod sdk;
#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use error::EXIT_SUCCESS;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    let code = match commands::install::run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code);
}
