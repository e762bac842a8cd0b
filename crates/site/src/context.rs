use std::sync::Arc;

use nesh_events::SiteBus;
use nesh_i18n::LocaleResolver;
use nesh_storage::{FileStorage, PreferenceStore};

use crate::config::SiteConfig;
use crate::notification::NotificationCenter;

/// Shared collaborators of one page load.
///
/// Built once at startup and handed to each controller by reference; no
/// controller holds a reference to another.
pub struct SiteContext {
    pub config: SiteConfig,
    pub store: Arc<PreferenceStore>,
    pub bus: Arc<SiteBus>,
    pub locale: LocaleResolver,
    pub notifications: NotificationCenter,
}

impl SiteContext {
    /// Open storage and materialize the persisted language.
    ///
    /// An unreadable storage file is not fatal: the session runs in memory.
    pub fn bootstrap(config: SiteConfig) -> Self {
        let store = Arc::new(open_store(&config));
        let bus = Arc::new(SiteBus::new());
        let locale = LocaleResolver::initialize(store.clone(), bus.clone(), config.default_language);

        tracing::info!(
            language = locale.current().code(),
            durable = config.storage_path.is_some(),
            "site context ready"
        );

        Self {
            config,
            store,
            bus,
            locale,
            notifications: NotificationCenter::new(),
        }
    }
}

fn open_store(config: &SiteConfig) -> PreferenceStore {
    let Some(path) = &config.storage_path else {
        return PreferenceStore::in_memory();
    };

    match FileStorage::open(path) {
        Ok(storage) => PreferenceStore::new(storage),
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "storage file unusable; running in memory");
            PreferenceStore::in_memory()
        }
    }
}
