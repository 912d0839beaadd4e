//! Favorite characters persisted in storage.
//!
//! DESIGN
//! ======
//! Storage is the single source of truth: every read parses the stored
//! array, so two tabs never disagree for longer than one `storage` event.
//! Same-tab toggles are published on an in-process channel because storage
//! writes do not notify the tab that made them; other tabs arrive through
//! the storage backend's external-change listener.
//!
//! Stored form is a JSON array of distinct integers, newest first.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::sync::Arc;

use catalog::{CatalogError, EntityId, coerce_id};
use serde_json::Value;

use crate::util::channel::{Channel, Subscription};
use crate::util::storage::KeyValueStorage;

pub const FAVORITES_KEY: &str = "rm_favorites_v1";

/// Shared handle; clones observe the same storage and channel.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStorage>,
    changes: Channel<Vec<EntityId>>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage, changes: Channel::new() }
    }

    /// Current favorites, newest first. Missing or malformed data reads as
    /// empty.
    pub fn ids(&self) -> Vec<EntityId> {
        read_ids(self.storage.as_ref())
    }

    pub fn is_favorite(&self, id: EntityId) -> bool {
        self.ids().contains(&id)
    }

    /// Remove `id` if present, otherwise insert it at the front. Returns the
    /// new list.
    pub fn toggle(&self, id: EntityId) -> Vec<EntityId> {
        let mut ids = self.ids();
        if let Some(pos) = ids.iter().position(|existing| *existing == id) {
            ids.remove(pos);
        } else {
            ids.insert(0, id);
        }
        self.write(&ids);
        self.changes.publish(&ids);
        ids
    }

    /// Call `listener` with the full list after every change, from this tab
    /// or another one.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[EntityId]) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);

        let local = {
            let listener = Arc::clone(&listener);
            self.changes.subscribe(move |ids: &Vec<EntityId>| listener(ids.as_slice()))
        };

        let storage = Arc::clone(&self.storage);
        let external = self.storage.on_external_change(Box::new(move |change| {
            if change.touches(FAVORITES_KEY) {
                listener(read_ids(storage.as_ref()).as_slice());
            }
        }));

        Subscription::merge(vec![local, external])
    }

    fn write(&self, ids: &[EntityId]) {
        match serde_json::to_string(ids) {
            Ok(raw) => {
                if let Err(e) = self.storage.set_item(FAVORITES_KEY, &raw) {
                    log::warn!("favorites not saved: {e}");
                }
            }
            Err(e) => log::warn!("favorites not encoded: {e}"),
        }
    }
}

/// Parse the stored list, coercing each entry and keeping first occurrences.
pub(crate) fn read_ids(storage: &dyn KeyValueStorage) -> Vec<EntityId> {
    let Some(raw) = storage.get_item(FAVORITES_KEY) else {
        return Vec::new();
    };
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&raw) else {
        return Vec::new();
    };

    let mut ids: Vec<EntityId> = Vec::with_capacity(items.len());
    for item in items {
        let coerced = match &item {
            Value::Number(n) => coerce_id(&n.to_string()),
            Value::String(s) => coerce_id(s),
            other => Err(CatalogError::InvalidId(other.to_string())),
        };
        match coerced {
            Ok(id) if !ids.contains(&id) => ids.push(id),
            Ok(_) => {}
            Err(e) => log::debug!("skipping stored favorite: {e}"),
        }
    }
    ids
}
