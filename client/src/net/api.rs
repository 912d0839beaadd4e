//! HTTP access to the explorer proxy.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` (see `transport`).
//! Tests: scripted transports, so every status/body path runs natively.
//!
//! ERROR HANDLING
//! ==============
//! One GET per call, no retry, no timeout. Non-2xx responses never yield a
//! value: they become `ApiError::Status` carrying the body as JSON when it
//! parses and as a JSON string otherwise, so error panels can show exactly
//! what the proxy returned.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use catalog::{EntityId, EntityKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Failures of a single API call.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiError {
    /// The proxy answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Value },

    /// No response was received.
    #[error("network error: {message}")]
    Network { message: String },

    /// A 2xx body was not JSON, or not the expected shape.
    #[error("unexpected response body: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// HTTP status, when the failure came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Pretty JSON rendering for error panels.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Failure before a complete response was read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// One GET against an absolute or origin-relative URL.
///
/// Futures are `?Send`: browser fetch futures are bound to the page thread.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// Cloneable API handle shared through context.
#[derive(Clone)]
pub struct ApiClient {
    base: Arc<str>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// `base` is prefixed to every path; empty means same origin.
    pub fn new(base: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base: Arc::from(base.trim_end_matches('/')),
            transport,
        }
    }

    /// Client for the browser, targeting the build-time `API_BASE_URL`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self::new(api_base_url(), Arc::new(super::transport::GlooTransport))
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// GET `path` and parse the body as JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        let raw = self
            .transport
            .get(&url)
            .await
            .map_err(|e| ApiError::Network { message: e.to_string() })?;
        interpret(raw.status, &raw.body)
    }

    /// GET `path` and deserialize into `T`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::get`], plus [`ApiError::Decode`] on a shape mismatch.
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.get(path).await?;
        decode(value)
    }
}

/// Build-time proxy base URL; empty targets the page's own origin.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}

/// Classify a completed response.
pub(crate) fn interpret(status: u16, text: &str) -> Result<Value, ApiError> {
    let parsed = serde_json::from_str::<Value>(text);
    if !(200..300).contains(&status) {
        let body = parsed.unwrap_or_else(|_| Value::String(text.to_owned()));
        return Err(ApiError::Status { status, body });
    }
    parsed.map_err(|e| ApiError::Decode { message: e.to_string() })
}

/// Deserialize an already-parsed value into a typed view.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the value does not fit `T`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode { message: e.to_string() })
}

// =============================================================================
// PATHS
// =============================================================================

/// `/api/{kind}?{query}`; the query is appended verbatim.
#[must_use]
pub fn list_endpoint(kind: EntityKind, query: &str) -> String {
    if query.is_empty() {
        kind.list_path()
    } else {
        format!("{}?{query}", kind.list_path())
    }
}

/// `/api/{kind}/{id}`.
#[must_use]
pub fn detail_endpoint(kind: EntityKind, id: EntityId) -> String {
    kind.detail_path(&id.to_string())
}

/// `/api/{kind}/{ids}` for a comma-joined batch, in the given order.
#[must_use]
pub fn batch_endpoint(kind: EntityKind, ids: &[EntityId]) -> String {
    kind.detail_path(&catalog::join_ids(ids))
}
