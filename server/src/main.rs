//! Explorer proxy entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! A thin pass-through in front of the public Rick and Morty dataset. The
//! browser client calls `/api/{characters,episodes,locations}` here; each
//! request is forwarded once and the upstream reply is relayed unchanged.

mod config;
mod routes;
mod state;
mod upstream;

use std::net::SocketAddr;
use std::sync::Arc;

use config::{ConfigError, ProxyConfig};
use upstream::{HttpUpstream, ProxyError};

/// Failures that stop the proxy before or while serving.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Upstream(#[from] ProxyError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "explorer proxy stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ProxyConfig::from_env()?;
    let upstream = HttpUpstream::new(config.timeouts)?;
    let state = state::AppState::new(config.upstream_base.clone(), Arc::new(upstream));

    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving static client");
    }
    let app = routes::app(state, config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(port = config.port, upstream = %config.upstream_base, "explorer proxy listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
