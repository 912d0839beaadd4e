use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::ScriptedTransport;

const TRENDING_PATH: &str = "/api/characters/1,2,3,4,5,6";

#[test]
fn batch_results_are_shown_and_cached() {
    let transport = ScriptedTransport::new();
    transport.reply(TRENDING_PATH, 200, r#"[{"id":1,"name":"Rick Sanchez"},{"id":2,"name":"Morty Smith"}]"#);
    let cache = EntityCache::new();

    let state = block_on(load_trending(&transport.client(), &cache));
    let TrendingState::Ready(characters) = state else {
        panic!("expected trending results");
    };
    assert_eq!(characters.len(), 2);
    assert_eq!(cache.get("character:2"), Some(json!({ "id": 2, "name": "Morty Smith" })));
}

#[test]
fn single_object_is_normalized() {
    let transport = ScriptedTransport::new();
    transport.reply(TRENDING_PATH, 200, r#"{"id":1,"name":"Rick Sanchez"}"#);
    let cache = EntityCache::new();

    let state = block_on(load_trending(&transport.client(), &cache));
    assert!(matches!(state, TrendingState::Ready(ref c) if c.len() == 1));
    assert!(cache.has("character:1"));
}

#[test]
fn failure_is_unavailable_not_error() {
    let transport = ScriptedTransport::new();
    transport.reply(TRENDING_PATH, 500, r#"{"error":"Proxy error"}"#);
    let cache = EntityCache::new();

    assert_eq!(block_on(load_trending(&transport.client(), &cache)), TrendingState::Unavailable);
    assert!(cache.is_empty());
}

#[test]
fn seed_cache_skips_records_without_id() {
    let cache = EntityCache::new();
    seed_cache(&cache, EntityKind::Episode, &[json!({ "id": 28 }), json!({ "name": "no id" }), json!({ "id": -1 })]);
    assert_eq!(cache.len(), 1);
    assert!(cache.has("episode:28"));
}
