use std::sync::atomic::AtomicUsize;

use super::*;

fn counting(storage: &MemoryStorage) -> (Arc<Mutex<Vec<Option<String>>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = storage.on_external_change(Box::new(move |change| {
        sink.lock().unwrap().push(change.key.clone());
    }));
    (seen, sub)
}

#[test]
fn get_returns_what_was_set() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("k"), None);
    storage.set_item("k", "v").unwrap();
    assert_eq!(storage.get_item("k").as_deref(), Some("v"));
}

#[test]
fn tabs_share_data() {
    let first = MemoryStorage::new();
    let second = first.open_tab();
    first.set_item("rm_theme", "light").unwrap();
    assert_eq!(second.get_item("rm_theme").as_deref(), Some("light"));
}

#[test]
fn writer_is_not_notified_of_its_own_write() {
    let storage = MemoryStorage::new();
    let (seen, _sub) = counting(&storage);
    storage.set_item("k", "v").unwrap();
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn other_tabs_are_notified_with_key() {
    let first = MemoryStorage::new();
    let second = first.open_tab();
    let third = first.open_tab();
    let (seen_second, _a) = counting(&second);
    let (seen_third, _b) = counting(&third);

    first.set_item("rm_favorites_v1", "[1]").unwrap();
    assert_eq!(*seen_second.lock().unwrap(), vec![Some("rm_favorites_v1".to_owned())]);
    assert_eq!(*seen_third.lock().unwrap(), vec![Some("rm_favorites_v1".to_owned())]);
}

#[test]
fn clear_notifies_with_no_key() {
    let first = MemoryStorage::new();
    let second = first.open_tab();
    let (seen, _sub) = counting(&second);

    first.set_item("a", "1").unwrap();
    first.clear();
    assert_eq!(second.get_item("a"), None);
    assert_eq!(*seen.lock().unwrap(), vec![Some("a".to_owned()), None]);
}

#[test]
fn remove_item_deletes_and_notifies() {
    let first = MemoryStorage::new();
    let second = first.open_tab();
    let (seen, _sub) = counting(&second);
    first.set_item("a", "1").unwrap();
    first.remove_item("a");
    assert_eq!(second.get_item("a"), None);
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn dropped_listener_stops_receiving() {
    let first = MemoryStorage::new();
    let second = first.open_tab();
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = Arc::clone(&hits);
        second.on_external_change(Box::new(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        }))
    };
    first.set_item("a", "1").unwrap();
    drop(sub);
    first.set_item("a", "2").unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn change_touches_its_key_or_everything_on_clear() {
    let keyed = StorageChange { key: Some("rm_favorites_v1".into()) };
    assert!(keyed.touches("rm_favorites_v1"));
    assert!(!keyed.touches("rm_theme"));
    assert!(StorageChange { key: None }.touches("rm_theme"));
}
