//! Typed preference access with graceful degradation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::backend::{InMemoryStorage, KeyValueStorage};

/// The logical values the site persists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Selected language code (`"en"` / `"am"`).
    Language,
    /// JSON-encoded cart ledger (source of truth).
    Cart,
    /// Cached total item count (derived from `Cart`).
    CartCount,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [StorageKey::Language, StorageKey::Cart, StorageKey::CartCount];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Language => "nesh_language",
            StorageKey::Cart => "nesh_cart",
            StorageKey::CartCount => "nesh_cart_count",
        }
    }
}

/// Narrow, never-failing wrapper over a [`KeyValueStorage`] backend.
///
/// Every value written is also kept in an in-memory overlay. The first backend
/// failure flips the store into degraded mode: from then on the backend is no
/// longer touched and reads/writes are served by the overlay for the rest of
/// the session.
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStorage>,
    overlay: RwLock<HashMap<StorageKey, String>>,
    degraded: AtomicBool,
}

impl core::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("degraded", &self.is_degraded())
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    pub fn new(backend: impl KeyValueStorage + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            overlay: RwLock::new(HashMap::new()),
            degraded: AtomicBool::new(false),
        }
    }

    /// Store backed by process memory only (tests, or no durable storage).
    pub fn in_memory() -> Self {
        Self::new(InMemoryStorage::new())
    }

    /// Whether a backend failure has switched the store to memory-only mode.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }

    pub fn get(&self, key: StorageKey) -> Option<String> {
        if !self.is_degraded() {
            match self.backend.get_item(key.as_str()) {
                Ok(value) => {
                    if let (Some(v), Ok(mut overlay)) = (&value, self.overlay.write()) {
                        overlay.insert(key, v.clone());
                    }
                    return value;
                }
                Err(err) => self.degrade(key, &err),
            }
        }
        self.overlay.read().ok()?.get(&key).cloned()
    }

    pub fn set(&self, key: StorageKey, value: &str) {
        if let Ok(mut overlay) = self.overlay.write() {
            overlay.insert(key, value.to_string());
        }

        if self.is_degraded() {
            return;
        }
        if let Err(err) = self.backend.set_item(key.as_str(), value) {
            self.degrade(key, &err);
        }
    }

    /// Switch to memory-only mode, keeping whatever the backend still serves.
    ///
    /// Values written this session win over backend copies.
    fn degrade(&self, key: StorageKey, err: &crate::StorageError) {
        if self.degraded.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::warn!(
            key = key.as_str(),
            error = %err,
            "preference storage failed; continuing in memory for this session"
        );

        let Ok(mut overlay) = self.overlay.write() else {
            return;
        };
        for key in StorageKey::ALL {
            if overlay.contains_key(&key) {
                continue;
            }
            if let Ok(Some(value)) = self.backend.get_item(key.as_str()) {
                overlay.insert(key, value);
            }
        }
    }

    pub fn language_code(&self) -> Option<String> {
        self.get(StorageKey::Language)
    }

    pub fn set_language_code(&self, code: &str) {
        self.set(StorageKey::Language, code);
    }

    pub fn cart_json(&self) -> Option<String> {
        self.get(StorageKey::Cart)
    }

    /// Persist the ledger and its derived item count, ledger first.
    pub fn set_cart(&self, ledger_json: &str, total_quantity: u32) {
        self.set(StorageKey::Cart, ledger_json);
        self.set(StorageKey::CartCount, &total_quantity.to_string());
    }

    /// Cached item count, if present and numeric.
    pub fn cart_count(&self) -> Option<u32> {
        self.get(StorageKey::CartCount)?.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn typed_helpers_use_the_site_keys() {
        let backend = Arc::new(InMemoryStorage::new());
        let store = PreferenceStore::new(backend.clone());

        store.set_language_code("am");
        store.set_cart("[]", 0);

        assert_eq!(backend.get_item("nesh_language").unwrap().as_deref(), Some("am"));
        assert_eq!(backend.get_item("nesh_cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.get_item("nesh_cart_count").unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn unreadable_count_is_absent() {
        let backend = Arc::new(InMemoryStorage::new());
        backend.set_item("nesh_cart_count", "lots").unwrap();
        let store = PreferenceStore::new(backend);
        assert_eq!(store.cart_count(), None);
    }

    #[test]
    fn failing_backend_degrades_to_memory_without_losing_writes() {
        let backend = Arc::new(InMemoryStorage::new());
        backend.set_unavailable(true);
        let store = PreferenceStore::new(backend.clone());

        store.set_language_code("am");
        assert!(store.is_degraded());
        assert_eq!(store.language_code().as_deref(), Some("am"));

        // Storage coming back mid-session does not flip the store back.
        backend.set_unavailable(false);
        store.set_language_code("en");
        assert_eq!(backend.get_item("nesh_language").unwrap(), None);
        assert_eq!(store.language_code().as_deref(), Some("en"));
    }

    #[test]
    fn quota_exhaustion_degrades_instead_of_failing() {
        let store = PreferenceStore::new(InMemoryStorage::with_quota(24));
        store.set_language_code("en");
        assert!(!store.is_degraded());

        store.set_cart(r#"[{"productId":"p1","name":"Bread","unitPrice":10.0,"quantity":1}]"#, 1);
        assert!(store.is_degraded());
        assert_eq!(store.cart_count(), Some(1));
        assert_eq!(store.language_code().as_deref(), Some("en"));
    }

    #[test]
    fn write_failure_keeps_values_already_in_the_backend() {
        let cart = r#"[{"productId":"p1","name":"Bread","unitPrice":10.0,"quantity":2}]"#;
        let quota = "nesh_cart".len() + cart.len() + "nesh_cart_count".len() + 1;
        let backend = Arc::new(InMemoryStorage::with_quota(quota));
        backend.set_item("nesh_cart", cart).unwrap();
        backend.set_item("nesh_cart_count", "2").unwrap();
        let store = PreferenceStore::new(backend.clone());

        store.set_language_code("en");

        assert!(store.is_degraded());
        assert_eq!(store.cart_json().as_deref(), Some(cart));
        assert_eq!(store.cart_count(), Some(2));
        assert_eq!(store.language_code().as_deref(), Some("en"));
    }

    #[test]
    fn session_writes_win_over_backend_copies_after_degrading() {
        let backend = Arc::new(InMemoryStorage::new());
        backend.set_item("nesh_language", "am").unwrap();
        let store = PreferenceStore::new(backend.clone());
        assert_eq!(store.language_code().as_deref(), Some("am"));

        store.set_cart("[]", 0);
        backend.set_unavailable(true);
        store.set_language_code("en");

        assert!(store.is_degraded());
        assert_eq!(store.language_code().as_deref(), Some("en"));
        assert_eq!(store.cart_count(), Some(0));
    }

    #[test]
    fn read_failure_serves_values_written_this_session() {
        let backend = Arc::new(InMemoryStorage::new());
        let store = PreferenceStore::new(backend.clone());
        store.set_cart("[]", 0);

        backend.set_unavailable(true);
        assert_eq!(store.cart_count(), Some(0));
        assert!(store.is_degraded());
    }
}
