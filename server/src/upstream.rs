//! Upstream dataset client and URL forwarding rules.
//!
//! DESIGN
//! ======
//! The proxy never interprets payloads. `Upstream` performs exactly one GET
//! and hands back status, content-type and raw bytes; route handlers relay
//! them unchanged. The trait seam exists so route tests can record the URLs
//! the proxy builds without a live third-party API.
//!
//! ERROR HANDLING
//! ==============
//! Only transport-level failures become `ProxyError`. Upstream 4xx/5xx are
//! ordinary `UpstreamResponse`s and are passed through verbatim.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use catalog::EntityKind;
use reqwest::Url;
use serde::Serialize;

use crate::config::UpstreamTimeouts;

/// Content-type used when the upstream response carries none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Fixed label of the transport failure envelope.
pub const PROXY_ERROR_LABEL: &str = "Proxy error";

// =============================================================================
// ERROR
// =============================================================================

/// Transport-level failures talking to the upstream dataset.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Connecting, sending, or waiting for response headers failed.
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response started but its body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(#[source] reqwest::Error),

    /// The configured base URL cannot be extended with resource segments.
    #[error("upstream URL cannot be built from base {0}")]
    BaseUrl(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Body of the fixed 500 response returned on transport failure.
#[derive(Debug, Serialize)]
pub struct ProxyFailure {
    pub error: &'static str,
    pub details: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ProxyFailure { error: PROXY_ERROR_LABEL, details: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// An upstream reply, captured before any interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        (self.status, [(CONTENT_TYPE, content_type)], self.body).into_response()
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// One-shot GET against the upstream dataset.
#[async_trait::async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch `url` once and capture the reply.
    ///
    /// # Errors
    ///
    /// Returns a [`ProxyError`] on any transport failure. HTTP error statuses
    /// are successful captures, not errors.
    async fn fetch(&self, url: Url) -> Result<UpstreamResponse, ProxyError>;
}

/// `reqwest`-backed upstream client.
pub struct HttpUpstream {
    http: reqwest::Client,
}

impl HttpUpstream {
    /// Build a client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend or client builder fails.
    pub fn new(timeouts: UpstreamTimeouts) -> Result<Self, ProxyError> {
        let mut builder = reqwest::Client::builder().connect_timeout(Duration::from_secs(timeouts.connect_secs));
        // Zero disables the overall deadline.
        if timeouts.request_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeouts.request_secs));
        }
        let http = builder
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl Upstream for HttpUpstream {
    async fn fetch(&self, url: Url) -> Result<UpstreamResponse, ProxyError> {
        let response = self.http.get(url).send().await.map_err(ProxyError::Request)?;

        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(ProxyError::Body)?;

        Ok(UpstreamResponse { status, content_type, body })
    }
}

// =============================================================================
// URL FORWARDING
// =============================================================================

/// Drop blank query values; on repeated keys the last non-blank value wins at
/// the position of the key's first occurrence. Non-blank values are kept
/// untrimmed.
#[must_use]
pub fn forwardable_query(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut kept: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        if value.trim().is_empty() {
            continue;
        }
        match kept.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => kept.push((key, value)),
        }
    }
    kept
}

/// Upstream URL for a kind's list endpoint with the forwarded query.
///
/// # Errors
///
/// Returns [`ProxyError::BaseUrl`] if `base` cannot carry path segments.
pub fn list_url(base: &Url, kind: EntityKind, query: &[(String, String)]) -> Result<Url, ProxyError> {
    let mut url = resource_url(base, &[kind.upstream_segment()])?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Upstream URL for one entity or a comma-joined batch. The identifier is
/// forwarded as a single path segment; commas stay literal.
///
/// # Errors
///
/// Returns [`ProxyError::BaseUrl`] if `base` cannot carry path segments.
pub fn detail_url(base: &Url, kind: EntityKind, id: &str) -> Result<Url, ProxyError> {
    resource_url(base, &[kind.upstream_segment(), id])
}

fn resource_url(base: &Url, segments: &[&str]) -> Result<Url, ProxyError> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| ProxyError::BaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
