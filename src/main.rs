//! provider-info — resolve a provider's base URL and token.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cli::args::Cli;
use provider_info::config;
use provider_info::constants::ENV_LOG;
use provider_info::env::Env;
use provider_info::providers;

fn main() {
    init_tracing();
    let cli = cli::parse();

    if let Err(err) = run(cli) {
        cli::print_error(&err);
        process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays clean for shell consumption.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let records = config::load_providers(&cli.json_file)?;

    if cli.list {
        for record in &records {
            println!("{}", record.name);
        }
        return Ok(());
    }

    let resolved = providers::resolve(&records, &cli.provider_name, &Env::real())?;
    print!("{}", cli.format.render(&resolved));

    Ok(())
}
