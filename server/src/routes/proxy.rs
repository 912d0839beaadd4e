//! Pass-through handlers for the upstream dataset.
//!
//! Each handler builds the equivalent upstream URL, performs one fetch, and
//! relays status, content-type and body unchanged. Only transport failures
//! are translated (into the fixed 500 envelope).

use axum::extract::{Path, Query, State};
use catalog::EntityKind;
use reqwest::Url;

use crate::state::AppState;
use crate::upstream::{self, ProxyError, UpstreamResponse};

/// `GET /api/{kind}?<query>`: forward to the upstream list endpoint.
pub async fn forward_list(
    kind: EntityKind,
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<UpstreamResponse, ProxyError> {
    let query = upstream::forwardable_query(pairs);
    let url = upstream::list_url(&state.upstream_base, kind, &query)?;
    relay(&state, url).await
}

/// `GET /api/{kind}/{id}`: forward to the upstream by-id endpoint. `id` may
/// be a single identifier or a comma-joined list.
pub async fn forward_detail(
    kind: EntityKind,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<UpstreamResponse, ProxyError> {
    let url = upstream::detail_url(&state.upstream_base, kind, &id)?;
    relay(&state, url).await
}

async fn relay(state: &AppState, url: Url) -> Result<UpstreamResponse, ProxyError> {
    match state.upstream.fetch(url.clone()).await {
        Ok(response) => {
            tracing::debug!(%url, status = response.status.as_u16(), "upstream replied");
            Ok(response)
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "upstream transport failure");
            Err(e)
        }
    }
}
