use super::*;

// =============================================================
// EntityKind
// =============================================================

#[test]
fn kinds_map_to_proxy_and_upstream_segments() {
    assert_eq!(EntityKind::Character.api_segment(), "characters");
    assert_eq!(EntityKind::Character.upstream_segment(), "character");
    assert_eq!(EntityKind::Episode.api_segment(), "episodes");
    assert_eq!(EntityKind::Episode.upstream_segment(), "episode");
    assert_eq!(EntityKind::Location.api_segment(), "locations");
    assert_eq!(EntityKind::Location.upstream_segment(), "location");
}

#[test]
fn list_and_detail_paths_target_the_proxy() {
    assert_eq!(EntityKind::Episode.list_path(), "/api/episodes");
    assert_eq!(EntityKind::Character.detail_path("1,2,3"), "/api/characters/1,2,3");
}

#[test]
fn cache_key_uses_singular_kind_prefix() {
    assert_eq!(EntityKind::Character.cache_key(1), "character:1");
    assert_eq!(EntityKind::Location.cache_key(20), "location:20");
}

// =============================================================
// coerce_id
// =============================================================

#[test]
fn coerce_id_accepts_numeric_text() {
    assert_eq!(coerce_id("5").unwrap(), 5);
    assert_eq!(coerce_id(" 42 ").unwrap(), 42);
    assert_eq!(coerce_id("7.0").unwrap(), 7);
}

#[test]
fn coerce_id_rejects_non_integers() {
    for raw in ["", "   ", "abc", "3.7", "-1", "NaN", "inf", "1,2"] {
        assert!(coerce_id(raw).is_err(), "expected {raw:?} to be rejected");
    }
}

#[test]
fn coerce_id_rejects_values_beyond_range() {
    assert!(coerce_id("4294967296").is_err());
    assert_eq!(coerce_id("4294967295").unwrap(), u32::MAX);
}

// =============================================================
// id joining
// =============================================================

#[test]
fn join_ids_preserves_order() {
    assert_eq!(join_ids(&[3, 1, 2]), "3,1,2");
    assert_eq!(join_ids(&[]), "");
}

#[test]
fn sorted_id_key_ignores_order() {
    assert_eq!(sorted_id_key(&[3, 1, 2]), "1,2,3");
    assert_eq!(sorted_id_key(&[2, 3, 1]), sorted_id_key(&[1, 2, 3]));
}
