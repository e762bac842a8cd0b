//! Preference Store: durable client-local key/value persistence.
//!
//! Page controllers read and write three logical values through
//! [`PreferenceStore`]: the selected language, the serialized cart ledger and
//! a cached cart item count. The store sits on top of a pluggable
//! [`KeyValueStorage`] backend and never reports backend failures to its
//! callers; it degrades to an in-memory session instead.

pub mod backend;
pub mod error;
pub mod file;
pub mod preferences;

pub use backend::{InMemoryStorage, KeyValueStorage};
pub use error::StorageError;
pub use file::FileStorage;
pub use preferences::{PreferenceStore, StorageKey};
