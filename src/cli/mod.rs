//! CLI command definitions, argument parsing, and terminal reporting.
//!
//! Uses clap derive macros for argument definitions. Argument errors
//! exit with status 1 rather than clap's default of 2.

pub mod args;

use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;

use args::Cli;

/// Parse the process arguments.
///
/// Help and version requests print and exit 0. Any other parse error
/// prints clap's message to stderr and exits 1.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = exit_code(err.kind());
            let _ = err.print();
            process::exit(code);
        }
    }
}

/// Exit status for a clap error kind.
fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

/// Print an error to stderr with a coloured `Error:` prefix.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), error_message(err));
}

/// The error and its source chain on one line.
fn error_message(err: &anyhow::Error) -> String {
    format!("{err:#}")
}
