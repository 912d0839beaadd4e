//! Key/value persistence behind a trait seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Favorites and the theme preference live in browser `localStorage`. The
//! `KeyValueStorage` trait keeps that dependency out of the stores so they
//! can be exercised natively: `BrowserStorage` (csr only) wraps the real
//! `localStorage` and the window `storage` event; `MemoryStorage` simulates
//! one origin shared by several tabs.
//!
//! Cross-tab semantics follow the browser: a write notifies every *other*
//! tab of the same origin, never the writer itself.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::channel::{Channel, Subscription, lock};

/// Failures writing to storage. Reads never fail; missing data reads as
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A mutation made outside the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    /// Affected key; `None` when the whole storage area was cleared.
    pub key: Option<String>,
}

impl StorageChange {
    /// Whether this change can have affected `key`.
    #[must_use]
    pub fn touches(&self, key: &str) -> bool {
        self.key.as_deref().is_none_or(|changed| changed == key)
    }
}

pub type ChangeListener = Box<dyn Fn(&StorageChange) + Send + Sync>;

pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if storage is unavailable or rejects the write
    /// (quota, privacy mode).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Observe mutations made by other tabs/windows of the same origin.
    fn on_external_change(&self, listener: ChangeListener) -> Subscription;
}

// =============================================================================
// IN-MEMORY
// =============================================================================

struct Origin {
    items: Mutex<HashMap<String, String>>,
    /// Every mutation, tagged with the tab that made it.
    bus: Channel<(u64, StorageChange)>,
    next_tab: AtomicU64,
}

/// In-memory storage for one tab of a simulated origin.
#[derive(Clone)]
pub struct MemoryStorage {
    origin: Arc<Origin>,
    tab: u64,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Arc::new(Origin {
                items: Mutex::new(HashMap::new()),
                bus: Channel::new(),
                next_tab: AtomicU64::new(1),
            }),
            tab: 0,
        }
    }

    /// Another tab on the same origin: shares the data, and each tab sees
    /// the other's writes as external changes.
    #[must_use]
    pub fn open_tab(&self) -> Self {
        Self {
            origin: Arc::clone(&self.origin),
            tab: self.origin.next_tab.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn remove_item(&self, key: &str) {
        lock(&self.origin.items).remove(key);
        self.announce(Some(key));
    }

    pub fn clear(&self) {
        lock(&self.origin.items).clear();
        self.announce(None);
    }

    fn announce(&self, key: Option<&str>) {
        let change = StorageChange { key: key.map(str::to_owned) };
        self.origin.bus.publish(&(self.tab, change));
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.origin.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock(&self.origin.items).insert(key.to_owned(), value.to_owned());
        self.announce(Some(key));
        Ok(())
    }

    fn on_external_change(&self, listener: ChangeListener) -> Subscription {
        let tab = self.tab;
        self.origin.bus.subscribe(move |(writer, change)| {
            if *writer != tab {
                listener(change);
            }
        })
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`, with the window `storage` event fanned out to
/// subscribers.
#[cfg(feature = "csr")]
#[derive(Clone)]
pub struct BrowserStorage {
    changes: Channel<StorageChange>,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    /// Install the window `storage` listener. Call once per page.
    #[must_use]
    pub fn install() -> Self {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let changes = Channel::new();
        if let Some(window) = web_sys::window() {
            let sink = changes.clone();
            let handler = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
                sink.publish(&StorageChange { key: event.key() });
            });
            if let Err(e) = window.add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref()) {
                log::warn!("storage listener not installed: {e:?}");
            }
            // Lives for the page; the channel does the per-subscriber bookkeeping.
            handler.forget();
        }
        Self { changes }
    }

    fn local() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn on_external_change(&self, listener: ChangeListener) -> Subscription {
        self.changes.subscribe(move |change| listener(change))
    }
}
