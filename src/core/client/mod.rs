//! HTTP client for the InferaDB Control API.
//!
//! A thin request/response layer: JSON encoding, session cookie
//! authentication, and translation of error responses into [`ApiError`].
//! One attempt per call; retry policy belongs to the caller.
//!
//! Entity endpoints live in the submodules as inherent methods on
//! [`Client`].

use std::fmt;
use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::constants;
use crate::error::{ApiError, ApiResult, ConfigError, Result};

mod certificates;
mod clients;
mod grants;
pub mod models;
mod organizations;
mod teams;
mod vaults;

/// Control API client.
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// mutable state, so one instance can serve many adapters concurrently.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session_token: Arc<Zeroizing<String>>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// JSON shape of an error response.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Client {
    /// Build the user-agent string from crate version.
    fn user_agent() -> String {
        format!("inferadb-provider/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Create a client for `endpoint`.
    ///
    /// An empty `session_token` sends requests without the session cookie.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the HTTP stack cannot be built.
    pub fn new(endpoint: &str, session_token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(Self::user_agent())
            .timeout(constants::REQUEST_TIMEOUT)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            base_url: endpoint.trim_end_matches('/').to_string(),
            session_token: Arc::new(Zeroizing::new(session_token.to_string())),
        })
    }

    /// Create a client from resolved provider settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the HTTP stack cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.endpoint, &settings.session_token)
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request.
    ///
    /// Serializes `body` as JSON when present. Non-2xx responses become
    /// [`ApiError::Status`]. A successful response with an empty body yields
    /// `Ok(None)`; otherwise the body is decoded into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode`, `ApiError::Transport`, `ApiError::Status`,
    /// or `ApiError::Decode` depending on where the call failed.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, path = %path, "sending request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if !self.session_token.is_empty() {
            req = req.header(
                COOKIE,
                format!("{}={}", constants::SESSION_COOKIE, self.session_token.as_str()),
            );
        }

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(ApiError::Encode)?;
            req = req.body(encoded);
        }

        let resp = req.send().await.map_err(ApiError::Transport)?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(ApiError::Transport)?;

        debug!(method = %method, path = %path, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(decode_error(status.as_u16(), &bytes));
        }

        if bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(ApiError::Decode)
    }

    /// GET a resource that must have a body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let result = self.request::<T, ()>(Method::GET, path, None).await?;
        require_body(result, path)
    }

    /// POST `body` and decode the created resource.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.request(Method::POST, path, Some(body)).await?;
        require_body(result, path)
    }

    /// POST with no body and ignore whatever comes back.
    pub(crate) async fn post_action(&self, path: &str) -> ApiResult<()> {
        self.request::<serde_json::Value, ()>(Method::POST, path, None)
            .await
            .map(|_| ())
    }

    /// PATCH `body` and decode the updated resource.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.request(Method::PATCH, path, Some(body)).await?;
        require_body(result, path)
    }

    /// DELETE a resource.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request::<serde_json::Value, ()>(Method::DELETE, path, None)
            .await
            .map(|_| ())
    }
}

/// Translate a non-2xx response into an [`ApiError::Status`].
///
/// `message` takes precedence over `error`; a body that is not the error
/// JSON shape is carried verbatim as the message.
fn decode_error(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => ApiError::Status {
            status,
            code: parsed.code.filter(|c| !c.is_empty()),
            message: parsed
                .message
                .filter(|m| !m.is_empty())
                .or(parsed.error)
                .unwrap_or_default(),
        },
        Err(_) => ApiError::Status {
            status,
            code: None,
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

fn require_body<T>(result: Option<T>, path: &str) -> ApiResult<T> {
    result.ok_or_else(|| ApiError::EmptyResponse {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_contains_version() {
        assert!(Client::user_agent().starts_with("inferadb-provider/"));
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        let client = Client::new("http://localhost:3000/", "t").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn debug_hides_session_token() {
        let client = Client::new("http://localhost:3000", "super-secret").unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[test]
    fn decode_error_prefers_message() {
        let err = decode_error(
            409,
            br#"{"error":"conflict","code":"name_taken","message":"name already used"}"#,
        );
        match err {
            ApiError::Status {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 409);
                assert_eq!(code.as_deref(), Some("name_taken"));
                assert_eq!(message, "name already used");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_error_tolerates_null_error_field() {
        let err = decode_error(
            409,
            br#"{"error":null,"message":"conflict happened","code":"c"}"#,
        );
        assert_eq!(err.code(), Some("c"));
        assert_eq!(
            err.to_string(),
            "InferaDB API error (409): c - conflict happened"
        );

        let err = decode_error(422, br#"{"code":"invalid"}"#);
        assert_eq!(err.code(), Some("invalid"));
        assert!(matches!(err, ApiError::Status { ref message, .. } if message.is_empty()));
    }

    #[test]
    fn decode_error_falls_back_to_error_field() {
        let err = decode_error(400, br#"{"error":"bad request"}"#);
        assert_eq!(err.to_string(), "InferaDB API error (400): bad request");
    }

    #[test]
    fn decode_error_keeps_raw_text() {
        let err = decode_error(502, b"<html>Bad Gateway</html>");
        assert_eq!(
            err.to_string(),
            "InferaDB API error (502): <html>Bad Gateway</html>"
        );
    }
}
