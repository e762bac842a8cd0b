//! Storage backend abstraction.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::StorageError;

/// Synchronous string key/value storage (the shape of browser local storage).
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S> KeyValueStorage for Arc<S>
where
    S: KeyValueStorage + ?Sized,
{
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-memory storage for tests/dev.
///
/// Can be switched off or given a byte quota to reproduce the failure modes of
/// real client storage.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
    quota_bytes: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys + values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota_bytes: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with `StorageError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        let map = self
            .inner
            .read()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        let mut map = self
            .inner
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))?;

        if let Some(quota) = self.quota_bytes {
            let used: usize = map
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_string() });
            }
        }

        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
