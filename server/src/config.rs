//! Proxy configuration parsed from environment variables.

use std::path::PathBuf;

use reqwest::Url;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://rickandmortyapi.com/api";
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that prevent the proxy from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid UPSTREAM_BASE_URL '{url}': {reason}")]
    InvalidUpstream { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub connect_secs: u64,
    pub request_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub port: u16,
    pub upstream_base: Url,
    pub timeouts: UpstreamTimeouts,
    /// Directory holding the built client, served as the router fallback.
    pub static_dir: Option<PathBuf>,
}

impl ProxyConfig {
    /// Build typed proxy config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 5000
    /// - `UPSTREAM_BASE_URL`: default `https://rickandmortyapi.com/api`
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `UPSTREAM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `STATIC_DIR`: unset disables static file serving
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a port number or the upstream base
    /// is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup (the process
    /// environment in production, a map in tests).
    ///
    /// # Errors
    ///
    /// See [`ProxyConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let upstream_base =
            parse_upstream_base(lookup("UPSTREAM_BASE_URL").as_deref().unwrap_or(DEFAULT_UPSTREAM_BASE_URL))?;
        let timeouts = UpstreamTimeouts {
            connect_secs: parse_u64(lookup("UPSTREAM_CONNECT_TIMEOUT_SECS"), DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
            request_secs: parse_u64(lookup("UPSTREAM_REQUEST_TIMEOUT_SECS"), DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS),
        };
        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { port, upstream_base, timeouts, static_dir })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

pub(crate) fn parse_upstream_base(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: &str| ConfigError::InvalidUpstream { url: raw.to_owned(), reason: reason.to_owned() };

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path"));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
