//! Provider configuration.
//!
//! Handles reading the optional TOML config file, merging explicit values,
//! and resolving the endpoint and session token against the environment.
//!
//! Resolution order for each setting: explicit value (CLI flag or config
//! file), then the environment variable, then the built-in default. There is
//! no default session token.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Explicit provider settings as supplied by the host.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Control API endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Session token used for authentication.
    #[serde(default)]
    pub session_token: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Layout of the config file: settings live under a `[provider]` table.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    provider: ProviderConfig,
}

/// Fully resolved settings ready to construct a client.
pub struct Settings {
    /// Control API base URL without a trailing slash.
    pub endpoint: String,
    /// Session token, wiped from memory on drop.
    pub session_token: Zeroizing<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("session_token", &"<redacted>")
            .finish()
    }
}

impl ProviderConfig {
    /// Parse a provider config document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or contains
    /// unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(file.provider)
    }

    /// Load a provider config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading provider config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Layer `overrides` on top of `self`; set values in `overrides` win.
    pub fn merge(self, overrides: ProviderConfig) -> Self {
        Self {
            endpoint: overrides.endpoint.or(self.endpoint),
            session_token: overrides.session_token.or(self.session_token),
        }
    }

    /// Resolve against the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSessionToken` when no token is found,
    /// or `ConfigError::InvalidEndpoint` when the endpoint is unusable.
    pub fn resolve(&self) -> Result<Settings> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// Environment values are only used when non-empty. Explicit values are
    /// used as given, so an explicitly empty token is still an error.
    ///
    /// # Errors
    ///
    /// Same as [`ProviderConfig::resolve`].
    pub fn resolve_with<F>(&self, lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let endpoint = self
            .endpoint
            .clone()
            .or_else(|| from_env(constants::ENDPOINT_ENV))
            .unwrap_or_else(|| constants::DEFAULT_ENDPOINT.to_string());
        let endpoint = normalize_endpoint(&endpoint)?;

        let session_token = self
            .session_token
            .clone()
            .or_else(|| from_env(constants::SESSION_TOKEN_ENV))
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingSessionToken)?;

        debug!(endpoint = %endpoint, "provider configuration resolved");

        Ok(Settings {
            endpoint,
            session_token: Zeroizing::new(session_token),
        })
    }
}

/// Validate the scheme and strip trailing slashes.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEndpoint` for empty or non-HTTP endpoints.
pub fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "endpoint is empty".to_string(),
        }
        .into());
    }
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "expected an http:// or https:// URL".to_string(),
        }
        .into());
    }
    Ok(trimmed.to_string())
}
