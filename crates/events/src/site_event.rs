//! The enumerated set of interactions a page controller reacts to.

use serde::{Deserialize, Serialize};

use nesh_core::{Language, ProductId};

use crate::event::Event;

/// Discrete site interaction or state notification.
///
/// The first four variants come from user controls (filter buttons, sort
/// selector, reset control, add-to-cart buttons). `LanguageChanged` and
/// `CartUpdated` are broadcast after the corresponding state has been
/// persisted, so independent controllers can re-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SiteEvent {
    /// A filter button was clicked (`data-filter` value, `"all"` = wildcard).
    FilterChanged { filter: String },
    /// The sort selector changed (`featured`, `price-low`, `price-high`, `newest`).
    SortChanged { sort: String },
    /// The reset control was clicked.
    FiltersReset,
    /// An add-to-cart control tied to a product was clicked.
    AddToCart { product_id: ProductId },
    /// The active language changed (or was materialized on initial load).
    LanguageChanged { language: Language },
    /// The persisted cart changed; carries the new total quantity.
    CartUpdated { total_quantity: u32 },
}

impl Event for SiteEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SiteEvent::FilterChanged { .. } => "site.listing.filter_changed",
            SiteEvent::SortChanged { .. } => "site.listing.sort_changed",
            SiteEvent::FiltersReset => "site.listing.filters_reset",
            SiteEvent::AddToCart { .. } => "site.cart.add_requested",
            SiteEvent::LanguageChanged { .. } => "site.language.changed",
            SiteEvent::CartUpdated { .. } => "site.cart.updated",
        }
    }
}
