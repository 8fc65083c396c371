//! sdd-scaffold: manifest-driven scaffolding for AI coding assistants.
//!
//! This is the main entry point for the `sdd-scaffold` CLI. It parses
//! arguments, sets up logging, runs the pipeline, and maps errors to exit
//! codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod fs;
pub mod manifest;
pub mod plan;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// `RUST_LOG` when set and valid, else WARN (INFO with `--verbose`).
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "info" } else { "warn" })
    })
}
