//! Constants used throughout the provider.
//!
//! Centralizes endpoint defaults, environment variable names, and wire
//! protocol values.

use std::time::Duration;

/// Type name prefix for every resource and data source (`inferadb_vault`).
pub const PROVIDER_TYPE_NAME: &str = "inferadb";

/// Control API endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.inferadb.com";

/// Environment variable holding the Control API endpoint.
pub const ENDPOINT_ENV: &str = "INFERADB_ENDPOINT";

/// Environment variable holding the session token.
pub const SESSION_TOKEN_ENV: &str = "INFERADB_SESSION_TOKEN";

/// Environment variable controlling log filtering.
pub const LOG_ENV: &str = "INFERADB_LOG";

/// Name of the session cookie attached to every request.
pub const SESSION_COOKIE: &str = "infera_session";

/// Upper bound for a single HTTP round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Tier applied to organizations whose plan omits one.
pub const DEFAULT_TIER: &str = "dev";
