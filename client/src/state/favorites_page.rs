//! Favorites page: one batch request for every favorited character.

#[cfg(test)]
#[path = "favorites_page_test.rs"]
mod favorites_page_test;

use catalog::{Character, EntityId, EntityKind, OneOrMany, sorted_id_key};

use super::request::{FetchRequest, LoadState, RequestGeneration, Ticket};
use crate::net::api::ApiError;

#[derive(Clone, Debug, Default)]
pub struct FavoritesPageState {
    pub ids: Vec<EntityId>,
    pub load: LoadState<Vec<Character>>,
    /// Sorted, comma-joined IDs of the last requested set.
    key: Option<String>,
    generation: RequestGeneration,
}

impl FavoritesPageState {
    /// Adopt a new favorites list. Returns a fetch only when the set of IDs
    /// (ignoring order) differs from the last one requested. An empty set
    /// resolves immediately without a request.
    pub fn set_ids(&mut self, ids: &[EntityId]) -> Option<FetchRequest> {
        self.ids = ids.to_vec();
        let key = sorted_id_key(ids);
        if self.key.as_deref() == Some(key.as_str()) {
            return None;
        }
        self.key = Some(key);
        self.begin()
    }

    pub fn retry(&mut self) -> Option<FetchRequest> {
        self.begin()
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<OneOrMany<Character>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("discarding stale favorites response");
            return false;
        }
        self.load = match result {
            Ok(found) => LoadState::Success(found.into_vec()),
            Err(e) => LoadState::Error(e),
        };
        true
    }

    fn begin(&mut self) -> Option<FetchRequest> {
        // Issued even for the empty set so an older in-flight batch is void.
        let ticket = self.generation.issue();
        let key = self.key.clone().unwrap_or_default();
        if key.is_empty() {
            self.load = LoadState::Success(Vec::new());
            return None;
        }
        self.load = LoadState::Loading;
        Some(FetchRequest { ticket, path: EntityKind::Character.detail_path(&key) })
    }
}
