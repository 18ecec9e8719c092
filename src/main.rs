//! Lexis - lexicon store CLI
//!
//! Keeps headwords and their meanings in a SQLite lexicon file, with exact
//! and fuzzy search, duplicate consolidation and CSV/JSON transfer.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use lexis_core::error::{ErrorKind, ExitCode as LexisExitCode, LexisError};
use lexis_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap can fail before `Cli.format` exists; honor a requested
            // JSON envelope anyway
            if argv_format_json {
                let lexis_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => {
                        let rendered = err.to_string();
                        let summary = rendered
                            .lines()
                            .next()
                            .unwrap_or_default()
                            .trim_start_matches("error: ")
                            .to_string();
                        LexisError::invalid_argument("arguments", summary)
                    }
                };

                eprintln!("{}", lexis_error.to_json());
                return ExitCode::from(lexis_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(LexisExitCode::Success as u8),
        Err(e) if e.kind() == ErrorKind::Cancelled => {
            if cli.format == OutputFormat::Json {
                println!(
                    "{}",
                    serde_json::json!({ "status": "cancelled", "message": e.to_string() })
                );
            } else if !cli.quiet {
                println!("Cancelled.");
            }
            ExitCode::from(e.exit_code() as u8)
        }
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
