//! Command-line interface.
//!
//! A thin host bridge: each command reads JSON documents from a file or
//! stdin, runs one provider operation, and prints the resulting JSON to
//! stdout. Diagnostics go to stderr.

pub mod actions;
pub mod completions;
pub mod data;
pub mod document;
pub mod output;
pub mod resource;
pub mod schema;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::config::ProviderConfig;
use crate::core::provider::Provider;
use crate::error::Result;

/// inferadb-provider - manage InferaDB resources declaratively.
#[derive(Parser)]
#[command(
    name = "inferadb-provider",
    about = "Infrastructure-as-code provider for the InferaDB Control API",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection options shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Control API endpoint [default: INFERADB_ENDPOINT or https://api.inferadb.com]
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Session token [default: INFERADB_SESSION_TOKEN]
    #[arg(long, global = true)]
    pub session_token: Option<String>,

    /// TOML file with a [provider] table
    #[arg(long, global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Merge the config file (if any) with flags; flags win.
    pub fn provider_config(&self) -> Result<ProviderConfig> {
        let base = match &self.config_file {
            Some(path) => ProviderConfig::load(path)?,
            None => ProviderConfig::default(),
        };
        Ok(base.merge(ProviderConfig {
            endpoint: self.endpoint.clone(),
            session_token: self.session_token.clone(),
        }))
    }

    /// Build a configured provider.
    pub fn provider(&self) -> Result<Provider> {
        Provider::configure(&self.provider_config()?)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print provider, resource, and data source schemas as JSON
    Schema {
        /// Resource or data source type (e.g. vault or inferadb_vault)
        #[arg(value_name = "TYPE")]
        type_name: Option<String>,
    },

    /// Create a resource from a planned state
    Create {
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Planned state JSON [default: stdin]
        #[arg(long, value_name = "FILE")]
        plan: Option<PathBuf>,
    },

    /// Refresh a resource state; prints null if the resource is gone
    Read {
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Current state JSON [default: stdin]
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
    },

    /// Update a resource in place
    Update {
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Prior state JSON
        #[arg(long, value_name = "FILE")]
        prior: PathBuf,
        /// Planned state JSON [default: stdin]
        #[arg(long, value_name = "FILE")]
        plan: Option<PathBuf>,
    },

    /// Delete a resource
    Delete {
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Current state JSON [default: stdin]
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
    },

    /// Import an existing resource by composite ID and read it
    Import {
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Composite ID, e.g. <org_id>/<vault_id>
        id: String,
    },

    /// Read a data source
    Data {
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Lookup keys JSON [default: stdin]
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Deactivate a client, revoking all of its credentials
    DeactivateClient {
        /// <org_id>/<client_id>
        id: String,
    },

    /// Revoke a client certificate
    RevokeCertificate {
        /// <org_id>/<client_id>/<cert_id>
        id: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

/// Run a command to completion.
pub fn execute(command: Command, global: &GlobalArgs) -> Result<()> {
    match command {
        Command::Schema { type_name } => schema::execute(type_name.as_deref()),
        Command::Completions { shell } => completions::execute(shell),
        command => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(execute_remote(command, global))
        }
    }
}

async fn execute_remote(command: Command, global: &GlobalArgs) -> Result<()> {
    let provider = global.provider()?;

    match command {
        Command::Create { type_name, plan } => {
            resource::create(&provider, &type_name, plan.as_deref()).await
        }
        Command::Read { type_name, state } => {
            resource::read(&provider, &type_name, state.as_deref()).await
        }
        Command::Update {
            type_name,
            prior,
            plan,
        } => resource::update(&provider, &type_name, &prior, plan.as_deref()).await,
        Command::Delete { type_name, state } => {
            resource::delete(&provider, &type_name, state.as_deref()).await
        }
        Command::Import { type_name, id } => resource::import(&provider, &type_name, &id).await,
        Command::Data { type_name, config } => {
            data::execute(&provider, &type_name, config.as_deref()).await
        }
        Command::DeactivateClient { id } => actions::deactivate_client(&provider, &id).await,
        Command::RevokeCertificate { id } => actions::revoke_certificate(&provider, &id).await,
        Command::Schema { .. } | Command::Completions { .. } => Ok(()),
    }
}
