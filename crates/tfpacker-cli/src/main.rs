//! tfpacker CLI
//!
//! Reorganizes the top-level blocks of a Terraform directory into output
//! files chosen by rule.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::PackArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(Commands::Version) => {
            commands::run_version();
            Ok(())
        }
        None => commands::run_pack(&PackArgs {
            dir: cli.dir,
            config: cli.config,
            output: cli.output,
            dry_run: cli.dry_run,
            exclude: cli.exclude,
        }),
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
