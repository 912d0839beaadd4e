//! "Popular today" strip on the characters page.
//!
//! One batch request on mount. Every returned record is seeded into the
//! cache so opening it paints instantly. Failure is not an error state, the
//! strip just says it is unavailable.

#[cfg(test)]
#[path = "trending_test.rs"]
mod trending_test;

use catalog::{Character, EntityId, EntityKind};
use serde_json::Value;

use super::cache::EntityCache;
use crate::net::api::{ApiClient, batch_endpoint, decode};

pub const TRENDING_IDS: [EntityId; 6] = [1, 2, 3, 4, 5, 6];

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TrendingState {
    #[default]
    Loading,
    Ready(Vec<Character>),
    Unavailable,
}

pub async fn load_trending(api: &ApiClient, cache: &EntityCache) -> TrendingState {
    let path = batch_endpoint(EntityKind::Character, &TRENDING_IDS);
    let records = match api.get(&path).await {
        Ok(Value::Array(items)) => items,
        Ok(single) => vec![single],
        Err(e) => {
            log::debug!("trending unavailable: {e}");
            return TrendingState::Unavailable;
        }
    };

    seed_cache(cache, EntityKind::Character, &records);
    let characters: Vec<Character> = records
        .into_iter()
        .filter_map(|record| decode::<Character>(record).ok())
        .collect();
    if characters.is_empty() {
        TrendingState::Unavailable
    } else {
        TrendingState::Ready(characters)
    }
}

/// Cache each record under its own `id`; records without one are skipped.
pub fn seed_cache(cache: &EntityCache, kind: EntityKind, records: &[Value]) {
    for record in records {
        let id = record
            .get("id")
            .and_then(Value::as_u64)
            .and_then(|id| EntityId::try_from(id).ok());
        if let Some(id) = id {
            cache.set(kind.cache_key(id), record.clone());
        }
    }
}
