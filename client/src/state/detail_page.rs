//! Single-entity detail state with stale-while-revalidate.
//!
//! DESIGN
//! ======
//! Opening a detail route paints any cached record immediately and always
//! re-fetches. A successful fetch overwrites the cache entry. A failed fetch
//! only surfaces as an error when nothing is on screen; otherwise the cached
//! record stays visible. Unlike the list pages, 404 here is an error.

#[cfg(test)]
#[path = "detail_page_test.rs"]
mod detail_page_test;

use catalog::{EntityKind, coerce_id};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::form_urlencoded;

use super::cache::EntityCache;
use super::request::{FetchRequest, LoadState, RequestGeneration, Ticket};
use crate::net::api::{ApiError, decode, detail_endpoint};

#[derive(Clone, Debug)]
pub struct DetailState<T> {
    pub kind: EntityKind,
    pub load: LoadState<T>,
    /// A fetch is in flight while a cached record is shown.
    pub revalidating: bool,
    path: String,
    cache_key: Option<String>,
    generation: RequestGeneration,
}

impl<T: DeserializeOwned> DetailState<T> {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            load: LoadState::Idle,
            revalidating: false,
            path: String::new(),
            cache_key: None,
            generation: RequestGeneration::default(),
        }
    }

    /// Switch to the entity named by the route parameter `raw_id`.
    ///
    /// Identifiers that do not coerce are still forwarded, so the proxy's
    /// own error is what the page shows.
    pub fn open(&mut self, raw_id: &str, cache: &EntityCache) -> FetchRequest {
        match coerce_id(raw_id) {
            Ok(id) => {
                self.path = detail_endpoint(self.kind, id);
                self.cache_key = Some(self.kind.cache_key(id));
            }
            Err(e) => {
                log::debug!("{e}; forwarding as-is");
                let encoded: String = form_urlencoded::byte_serialize(raw_id.trim().as_bytes()).collect();
                self.path = self.kind.detail_path(&encoded);
                self.cache_key = None;
            }
        }

        let cached = self
            .cache_key
            .as_deref()
            .and_then(|key| cache.get(key))
            .and_then(|value| decode::<T>(value).ok());
        self.load = match cached {
            Some(record) => LoadState::Success(record),
            None => LoadState::Loading,
        };
        self.begin()
    }

    /// Re-issue the fetch for the current entity.
    pub fn retry(&mut self) -> FetchRequest {
        if self.load.value().is_none() {
            self.load = LoadState::Loading;
        }
        self.begin()
    }

    /// Commit a fetch result if `ticket` is still current.
    pub fn finish(&mut self, ticket: Ticket, result: Result<Value, ApiError>, cache: &EntityCache) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("discarding stale {} detail response", self.kind);
            return false;
        }
        self.revalidating = false;

        let outcome = result.and_then(|value| {
            if let Some(key) = &self.cache_key {
                cache.set(key.clone(), value.clone());
            }
            decode::<T>(value)
        });
        match outcome {
            Ok(record) => self.load = LoadState::Success(record),
            Err(e) if self.load.value().is_some() => {
                log::debug!("keeping cached {} after refresh failure: {e}", self.kind);
            }
            Err(e) => self.load = LoadState::Error(e),
        }
        true
    }

    fn begin(&mut self) -> FetchRequest {
        self.revalidating = self.load.value().is_some();
        FetchRequest {
            ticket: self.generation.issue(),
            path: self.path.clone(),
        }
    }
}
