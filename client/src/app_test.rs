use super::*;
use crate::net::testing::ScriptedTransport;
use crate::util::storage::MemoryStorage;

#[test]
fn services_share_storage_between_favorites_and_theme() {
    let storage = MemoryStorage::new();
    let services = AppServices::new(ScriptedTransport::new().client(), Arc::new(storage.clone()));

    services.favorites.toggle(3);
    assert_eq!(storage.get_item(crate::state::favorites::FAVORITES_KEY).as_deref(), Some("[3]"));
    assert_eq!(theme::read_preference(services.storage.as_ref()), theme::Theme::Dark);
}

#[test]
fn cloned_services_share_cache() {
    let services = AppServices::new(ScriptedTransport::new().client(), Arc::new(MemoryStorage::new()));
    let clone = services.clone();
    clone.cache.set("episode:1", serde_json::json!({ "id": 1 }));
    assert!(services.cache.has("episode:1"));
}
