//! Hover prefetch: warm the cache before a detail page opens.

#[cfg(test)]
#[path = "prefetch_test.rs"]
mod prefetch_test;

use catalog::{EntityId, EntityKind};

use super::cache::EntityCache;
use crate::net::api::{ApiClient, detail_endpoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefetch {
    /// Already cached; no request made.
    Cached,
    Fetched,
    /// The request failed; nothing cached.
    Failed,
}

/// Fetch one entity into the cache unless it is already there. Failures are
/// logged and otherwise ignored.
pub async fn prefetch(api: &ApiClient, cache: &EntityCache, kind: EntityKind, id: EntityId) -> Prefetch {
    let key = kind.cache_key(id);
    if cache.has(&key) {
        return Prefetch::Cached;
    }
    match api.get(&detail_endpoint(kind, id)).await {
        Ok(value) => {
            cache.set(key, value);
            Prefetch::Fetched
        }
        Err(e) => {
            log::debug!("prefetch of {key} failed: {e}");
            Prefetch::Failed
        }
    }
}
