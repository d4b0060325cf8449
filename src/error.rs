//! Error types.
//!
//! Every failure in the crate is one of three families: configuration,
//! transport/API, or resource lifecycle. They are kept as separate enums so
//! callers can match on the family they care about, and folded into
//! [`Error`] for propagation with `?`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the underlying cause is an HTTP 404 from the API.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api(e) => e.is_not_found(),
            Self::Resource(ResourceError::NotFound { .. }) => true,
            Self::Resource(ResourceError::Operation { source, .. }) => source.is_not_found(),
            _ => false,
        }
    }
}

/// Provider configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "missing session token: set session_token in the provider configuration \
         or the INFERADB_SESSION_TOKEN environment variable"
    )]
    MissingSessionToken,

    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Errors produced by the transport client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to marshal request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to unmarshal response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("empty response body from {path}")]
    EmptyResponse { path: String },

    #[error("InferaDB API error ({status}): {}", status_detail(.code, .message))]
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ApiError>,
    },
}

fn status_detail(code: &Option<String>, message: &str) -> String {
    match code {
        Some(code) => format!("{code} - {message}"),
        None => message.to_string(),
    }
}

impl ApiError {
    /// Wrap this error with a description of the operation that failed.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any context wrappers.
    pub fn root(&self) -> &ApiError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status carried by an API error response, if any.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine-readable error code from the API response body, if any.
    pub fn code(&self) -> Option<&str> {
        match self.root() {
            Self::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True when the API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Lifecycle step that failed, used in [`ResourceError::Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Resource and data-source lifecycle errors.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("invalid import ID for {kind}: expected format {expected}, got: {got:?}")]
    InvalidImportId {
        kind: &'static str,
        expected: String,
        got: String,
    },

    #[error(
        "{kind} cannot be updated in place: every attribute requires replacement \
         (the provider schema should have planned a replacement; please report this)"
    )]
    ImmutableUpdate { kind: &'static str },

    #[error("invalid {attribute} for {kind}: {value:?} (expected one of: {expected})")]
    InvalidAttribute {
        kind: &'static str,
        attribute: &'static str,
        value: String,
        expected: String,
    },

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("missing required attribute {attribute:?} for {kind}")]
    MissingAttribute {
        kind: &'static str,
        attribute: &'static str,
    },

    #[error("could not {operation} {kind}{}: {source}", describe_id(.id))]
    Operation {
        operation: Operation,
        kind: &'static str,
        id: Option<String>,
        #[source]
        source: ApiError,
    },

    #[error("unknown {category} type: {name}")]
    UnknownType { category: &'static str, name: String },

    #[error("invalid {kind} document: {source}")]
    InvalidState {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_id(id: &Option<String>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!(" {id}"),
        _ => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result alias for transport-level calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            code: Some("not_found".to_string()),
            message: "vault not found".to_string(),
        }
    }

    #[test]
    fn test_status_display_with_code() {
        assert_eq!(
            not_found().to_string(),
            "InferaDB API error (404): not_found - vault not found"
        );
    }

    #[test]
    fn test_status_display_without_code() {
        let err = ApiError::Status {
            status: 500,
            code: None,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "InferaDB API error (500): boom");
    }

    #[test]
    fn test_not_found_seen_through_context() {
        let err = not_found()
            .context("failed to get vault")
            .context("outer");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("not_found"));
        assert!(err.to_string().starts_with("outer: failed to get vault: "));
    }

    #[test]
    fn test_other_status_is_not_not_found() {
        let err = ApiError::Status {
            status: 403,
            code: None,
            message: "forbidden".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(!ApiError::EmptyResponse { path: "/v1".into() }.is_not_found());
    }

    #[test]
    fn test_operation_error_names_kind_and_id() {
        let err = ResourceError::Operation {
            operation: Operation::Read,
            kind: "vault",
            id: Some("42".to_string()),
            source: not_found(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("could not read vault 42: "));

        let err = ResourceError::Operation {
            operation: Operation::Create,
            kind: "vault",
            id: None,
            source: not_found(),
        };
        assert!(err.to_string().starts_with("could not create vault: "));
    }

    #[test]
    fn test_top_level_not_found() {
        let err: Error = ResourceError::Operation {
            operation: Operation::Update,
            kind: "team",
            id: Some("1".into()),
            source: not_found(),
        }
        .into();
        assert!(err.is_not_found());

        let err: Error = ConfigError::MissingSessionToken.into();
        assert!(!err.is_not_found());
    }
}
