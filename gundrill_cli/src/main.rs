//! # Gundrill CLI
//!
//! Terminal front end for the gun-drilling standard time engine.
//!
//! ```text
//! gundrill calc -m 25CR -d 0.375 -l 10 --fmj
//! gundrill interactive --save
//! gundrill lookup -m 13CR -d 0.375
//! ```

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` is honored and `-v` raises the floor to debug
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let result = match &cli.command {
        Commands::Calc(args) => commands::calc(args, &cli.global),
        Commands::Interactive(args) => commands::interactive(args, &cli.global),
        Commands::Lookup(args) => commands::lookup(args),
        Commands::Materials(args) => commands::materials(args),
        Commands::History(args) => commands::history(args, &cli.global.history_file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
