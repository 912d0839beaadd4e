//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the proxy's HTTP surface: a list and a by-id route per
//! entity kind under `/api`, plus `/health`. When a static directory is
//! configured the built browser client is served as the fallback, so one
//! process can host the whole explorer.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::get;
use catalog::EntityKind;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full router: proxy routes, health, CORS, request tracing, and the
/// optional static client.
pub fn app(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router: Router<AppState> = Router::new().route("/health", get(health));

    for kind in EntityKind::ALL {
        let list_path = kind.list_path();
        let detail_path = format!("{list_path}/{{id}}");
        router = router
            .route(
                &list_path,
                get(move |state: State<AppState>, query: Query<Vec<(String, String)>>| {
                    proxy::forward_list(kind, state, query)
                }),
            )
            .route(
                &detail_path,
                get(move |state: State<AppState>, id: Path<String>| proxy::forward_detail(kind, state, id)),
            );
    }

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /health`: liveness probe; never touches the upstream.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
