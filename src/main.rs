//! Binary entry point for lev-bounds.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use lev_bounds::cli::output::{OutputFormat, format_error};
use lev_bounds::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = cli.format;

    match execute(&cli) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Err(e) = write!(stdout, "{output}").and_then(|()| stdout.flush())
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error: could not print: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
