use nesh_storage::PreferenceStore;

use crate::line::{decode_lines, total_quantity};

/// Cart item count as shown in the site header.
///
/// Reads the cached `nesh_cart_count` scalar, so headers on pages without a
/// product listing never decode the ledger. Falls back to the ledger when the
/// cache is missing or unreadable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CartBadge {
    count: u32,
}

impl CartBadge {
    pub fn read(store: &PreferenceStore) -> Self {
        let count = store.cart_count().unwrap_or_else(|| {
            store
                .cart_json()
                .and_then(|raw| decode_lines(&raw))
                .map(|lines| total_quantity(&lines))
                .unwrap_or(0)
        });
        Self { count }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Badge text content.
    pub fn text(&self) -> String {
        self.count.to_string()
    }
}
