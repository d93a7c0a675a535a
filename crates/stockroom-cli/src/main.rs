//! stockroom - CLI tool for querying product catalogs.
//!
//! A thin wrapper over the `stockroom` library: each invocation loads a
//! catalog file into the in-memory repository and runs one use case.

mod catalog;
mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::products;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Products(cmd) => products::handle(cmd).await,
    }
}

/// Environment variable holding a log filter directive, e.g. `stockroom=debug`.
const LOG_ENV: &str = "STOCKROOM_LOG";

/// Logs always go to stderr so stdout stays machine readable. A filter in
/// `STOCKROOM_LOG` takes precedence over the `-v` count.
fn init_logging(verbosity: u8, json: bool) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 2);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}
