//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! proxy keeps no mutable state between requests: it only needs to know
//! where the upstream lives and how to reach it.

use std::sync::Arc;

use reqwest::Url;

use crate::upstream::Upstream;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Base URL every forwarded request is built from.
    pub upstream_base: Url,
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream_base: Url, upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream_base, upstream }
    }
}
