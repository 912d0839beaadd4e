//! Browser transport backed by `gloo-net`.

use super::api::{RawResponse, Transport, TransportError};

/// `fetch`-based transport for the page thread.
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
