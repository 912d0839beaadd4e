use std::sync::Mutex;

use super::*;
use crate::util::storage::MemoryStorage;

fn store_on(storage: &MemoryStorage) -> FavoritesStore {
    FavoritesStore::new(Arc::new(storage.clone()))
}

fn recorder(store: &FavoritesStore) -> (Arc<Mutex<Vec<Vec<EntityId>>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = store.subscribe(move |ids| sink.lock().unwrap().push(ids.to_vec()));
    (seen, sub)
}

#[test]
fn empty_storage_reads_as_no_favorites() {
    let store = store_on(&MemoryStorage::new());
    assert!(store.ids().is_empty());
    assert!(!store.is_favorite(1));
}

#[test]
fn malformed_or_non_array_data_reads_as_empty() {
    let storage = MemoryStorage::new();
    let store = store_on(&storage);
    for raw in ["not json", r#"{"ids":[1]}"#, "42", "null"] {
        storage.set_item(FAVORITES_KEY, raw).unwrap();
        assert!(store.ids().is_empty(), "{raw} should read as empty");
    }
}

#[test]
fn foreign_entries_are_coerced_and_deduplicated() {
    let storage = MemoryStorage::new();
    storage.set_item(FAVORITES_KEY, r#"[3, "5", 3, 5.0, "x", null, 2.5, 7]"#).unwrap();
    assert_eq!(store_on(&storage).ids(), vec![3, 5, 7]);
}

#[test]
fn toggle_inserts_newest_first_and_persists() {
    let storage = MemoryStorage::new();
    let store = store_on(&storage);

    assert_eq!(store.toggle(1), vec![1]);
    assert_eq!(store.toggle(2), vec![2, 1]);
    assert!(store.is_favorite(2));
    assert_eq!(storage.get_item(FAVORITES_KEY).as_deref(), Some("[2,1]"));

    assert_eq!(store.toggle(1), vec![2]);
    assert!(!store.is_favorite(1));
}

#[test]
fn toggle_twice_restores_original_set() {
    let store = store_on(&MemoryStorage::new());
    store.toggle(4);
    store.toggle(9);
    let before = store.ids();

    store.toggle(4);
    store.toggle(4);
    let mut after = store.ids();
    let mut expected = before.clone();
    after.sort_unstable();
    expected.sort_unstable();
    assert_eq!(after, expected);
}

#[test]
fn membership_agrees_with_toggle_result() {
    let store = store_on(&MemoryStorage::new());
    for id in [5, 3, 5, 8, 1, 3, 3, 8] {
        let next = store.toggle(id);
        assert_eq!(next, store.ids());
        for candidate in 1..=9 {
            assert_eq!(store.is_favorite(candidate), next.contains(&candidate));
        }
    }
}

#[test]
fn same_tab_toggle_notifies_subscribers() {
    let store = store_on(&MemoryStorage::new());
    let (seen, _sub) = recorder(&store);

    store.toggle(1);
    store.toggle(2);
    assert_eq!(*seen.lock().unwrap(), vec![vec![1], vec![2, 1]]);
}

#[test]
fn other_tab_toggle_notifies_with_updated_list() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_tab();
    let store_a = store_on(&tab_a);
    let store_b = store_on(&tab_b);
    let (seen_b, _sub) = recorder(&store_b);

    store_a.toggle(42);
    assert_eq!(*seen_b.lock().unwrap(), vec![vec![42]]);
    assert!(store_b.is_favorite(42));
}

#[test]
fn foreign_write_and_clear_notify_but_unrelated_keys_do_not() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_tab();
    let store_b = store_on(&tab_b);
    let (seen, _sub) = recorder(&store_b);

    tab_a.set_item("rm_theme", "light").unwrap();
    tab_a.set_item(FAVORITES_KEY, "[7,8]").unwrap();
    tab_a.clear();
    assert_eq!(*seen.lock().unwrap(), vec![vec![7, 8], vec![]]);
}

#[test]
fn dropped_subscription_stops_both_sources() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.open_tab();
    let store_b = store_on(&tab_b);
    let (seen, sub) = recorder(&store_b);
    drop(sub);

    store_b.toggle(1);
    store_on(&tab_a).toggle(2);
    assert!(seen.lock().unwrap().is_empty());
}
