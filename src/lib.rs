//! inferadb-provider - infrastructure-as-code provider for the InferaDB
//! Control API.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/                # Host bridge commands (JSON in, JSON out)
//! └── core/
//!     ├── client/         # Control API transport and endpoints
//!     │   └── models      # Wire types
//!     ├── resource/       # Lifecycle engine and per-entity strategies
//!     ├── data_source     # Read-only lookups
//!     ├── provider        # Registry of resources and data sources
//!     ├── schema          # Attribute declarations
//!     └── config          # Endpoint and session token resolution
//! ```
//!
//! # Resources
//!
//! `inferadb_organization`, `inferadb_vault`, `inferadb_client`,
//! `inferadb_client_certificate`, `inferadb_team`, `inferadb_team_member`,
//! `inferadb_vault_user_grant`, `inferadb_vault_team_grant`.
//!
//! # Data sources
//!
//! `inferadb_organization`, `inferadb_vault`, `inferadb_client`,
//! `inferadb_team`.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::client::Client;
pub use crate::core::config::ProviderConfig;
pub use crate::core::provider::Provider;
