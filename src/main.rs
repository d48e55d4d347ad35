//! movierec - title search and cohort-based movie recommendations
//!
//! Finds MovieLens movies by title and recommends the movies that the
//! movie's biggest fans rated far more highly than everyone else did.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::debug;

use cli::{Cli, OutputFormat};
use movierec_core::error::RecError;
use movierec_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&cli, &e);
            exit_code(&e)
        }
    }
}

/// Help and version go to stdout as usual. Real parse errors keep clap's
/// rendering unless JSON output was asked for, in which case they become a
/// `usage_error` envelope on stderr.
fn parse_failure(err: clap::Error) -> ExitCode {
    if !err.use_stderr() || requested_format() != Some(OutputFormat::Json) {
        err.exit();
    }

    let error = RecError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    exit_code(&error)
}

/// Last valid `--format` value on the raw command line.
/// Used only when clap itself could not finish parsing.
fn requested_format() -> Option<OutputFormat> {
    let args: Vec<String> = env::args().skip(1).collect();

    args.iter()
        .enumerate()
        .filter_map(|(i, arg)| match arg.strip_prefix("--format") {
            Some("") => args.get(i + 1).map(String::as_str),
            Some(rest) => rest.strip_prefix('='),
            None => None,
        })
        .filter_map(|value| value.parse().ok())
        .last()
}

fn report(cli: &Cli, error: &RecError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", error),
    }
}

fn exit_code(error: &RecError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}
