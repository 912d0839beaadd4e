use catalog::{Character, Episode};
use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::ScriptedTransport;

fn rick() -> Value {
    json!({ "id": 5, "name": "Jerry Smith", "status": "Alive" })
}

#[test]
fn cache_miss_loads_then_caches() {
    let transport = ScriptedTransport::new();
    transport.reply("/api/characters/5", 200, &rick().to_string());
    let api = transport.client();
    let cache = EntityCache::new();

    let mut state = DetailState::<Character>::new(EntityKind::Character);
    let request = state.open("5", &cache);
    assert!(state.load.is_loading());
    assert!(!state.revalidating);

    state.finish(request.ticket, block_on(api.get(&request.path)), &cache);
    assert_eq!(state.load.value().map(|c| c.name.as_str()), Some("Jerry Smith"));
    assert_eq!(cache.get("character:5"), Some(rick()));
}

#[test]
fn cache_hit_paints_immediately_and_still_refetches() {
    let cache = EntityCache::new();
    cache.set("character:5", json!({ "id": 5, "name": "Jerry (cached)" }));

    let mut state = DetailState::<Character>::new(EntityKind::Character);
    let request = state.open("5", &cache);
    assert_eq!(state.load.value().map(|c| c.name.as_str()), Some("Jerry (cached)"));
    assert!(state.revalidating);
    assert_eq!(request.path, "/api/characters/5");

    state.finish(request.ticket, Ok(rick()), &cache);
    assert_eq!(state.load.value().map(|c| c.name.as_str()), Some("Jerry Smith"));
    assert!(!state.revalidating);
    assert_eq!(cache.get("character:5"), Some(rick()));
}

#[test]
fn refresh_failure_keeps_cached_record() {
    let transport = ScriptedTransport::new();
    transport.fail("/api/characters/5", "offline");
    let api = transport.client();
    let cache = EntityCache::new();
    cache.set("character:5", rick());

    let mut state = DetailState::<Character>::new(EntityKind::Character);
    let request = state.open("5", &cache);
    state.finish(request.ticket, block_on(api.get(&request.path)), &cache);

    assert_eq!(state.load.value().map(|c| c.id), Some(5));
    assert!(state.load.error().is_none());
}

#[test]
fn not_found_without_cache_is_an_error() {
    let transport = ScriptedTransport::new();
    transport.reply("/api/episodes/9999", 404, r#"{"error":"Episode not found"}"#);
    let api = transport.client();
    let cache = EntityCache::new();

    let mut state = DetailState::<Episode>::new(EntityKind::Episode);
    let request = state.open("9999", &cache);
    state.finish(request.ticket, block_on(api.get(&request.path)), &cache);
    assert!(state.load.error().is_some_and(ApiError::is_not_found));
}

#[test]
fn retry_after_error_reloads() {
    let transport = ScriptedTransport::new();
    transport
        .reply("/api/locations/1", 500, "boom")
        .reply("/api/locations/1", 200, r#"{"id":1,"name":"Earth (C-137)"}"#);
    let api = transport.client();
    let cache = EntityCache::new();

    let mut state = DetailState::<catalog::Location>::new(EntityKind::Location);
    let request = state.open("1", &cache);
    state.finish(request.ticket, block_on(api.get(&request.path)), &cache);
    assert!(state.load.error().is_some());

    let retry = state.retry();
    assert!(state.load.is_loading());
    state.finish(retry.ticket, block_on(api.get(&retry.path)), &cache);
    assert_eq!(state.load.value().map(|l| l.name.as_str()), Some("Earth (C-137)"));
}

#[test]
fn switching_entities_discards_the_slow_previous_response() {
    let cache = EntityCache::new();
    let mut state = DetailState::<Character>::new(EntityKind::Character);
    let first = state.open("1", &cache);
    let second = state.open("2", &cache);

    assert!(state.finish(second.ticket, Ok(json!({ "id": 2, "name": "Morty Smith" })), &cache));
    assert!(!state.finish(first.ticket, Ok(json!({ "id": 1, "name": "Rick Sanchez" })), &cache));
    assert_eq!(state.load.value().map(|c| c.id), Some(2));
    assert!(!cache.has("character:1"));
}

#[test]
fn loose_numeric_ids_are_canonical() {
    let cache = EntityCache::new();
    cache.set("character:5", rick());
    let mut state = DetailState::<Character>::new(EntityKind::Character);
    let request = state.open(" 5.0 ", &cache);
    assert_eq!(request.path, "/api/characters/5");
    assert!(state.load.value().is_some());
}

#[test]
fn invalid_ids_are_forwarded_uncached() {
    let cache = EntityCache::new();
    let mut state = DetailState::<Character>::new(EntityKind::Character);
    let request = state.open("abc", &cache);
    assert_eq!(request.path, "/api/characters/abc");

    state.finish(request.ticket, Ok(json!({ "id": 0 })), &cache);
    assert!(cache.is_empty());
}
