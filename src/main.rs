//! inferadb-provider - infrastructure-as-code provider for InferaDB.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use inferadb_provider::cli::output;
use inferadb_provider::cli::{execute, Cli};
use inferadb_provider::core::constants::LOG_ENV;
use inferadb_provider::error::{ConfigError, Error, ResourceError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.global.verbose {
            EnvFilter::new("inferadb_provider=debug")
        } else {
            EnvFilter::new("inferadb_provider=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.global) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingSessionToken) => {
                Some("pass --session-token or set INFERADB_SESSION_TOKEN")
            }
            Error::Resource(ResourceError::UnknownType { .. }) => {
                Some("run: inferadb-provider schema")
            }
            Error::Resource(ResourceError::ImmutableUpdate { .. }) => {
                Some("delete and create the resource instead")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
