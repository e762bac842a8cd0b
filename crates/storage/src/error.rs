use thiserror::Error;

/// Failure reported by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or inaccessible (private mode, revoked permission).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The write would exceed the backend's capacity.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    /// Persisted content could not be decoded.
    #[error("storage content is corrupt: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
