//! Graphwalk - graph and grid traversal queries from the command line
//!
//! Loads a graph or grid from a JSON file, runs one query over it and
//! prints the result as plain text or JSON.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if argv_requests_json() => return report_parse_error_json(err),
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Bad arguments under `--format json` become a `usage_error` envelope
fn report_parse_error_json(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }
    let error = GraphError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Scan raw argv for `--format json`, since parsing may have failed
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format=json" || (arg == "--format" && args.next().is_some_and(|v| v == "json")) {
            return true;
        }
    }
    false
}
