//! Products page controller: listing filters, add-to-cart, load more.

use std::sync::Arc;
use std::time::Duration;

use nesh_cart::CartLedger;
use nesh_catalog::{CatalogSnapshot, Filter, FilterSortState, ProductGridView, SortKey};
use nesh_core::{DomainError, DomainResult, ProductId};
use nesh_events::{EventBus, SiteBus, SiteEvent, Subscription};
use nesh_i18n::LocaleResolver;
use nesh_storage::PreferenceStore;
use serde::Serialize;

use crate::notification::{Notification, NotificationCenter, NotificationKind};

/// Render model of the products page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsView {
    pub grid: ProductGridView,
    pub filter: String,
    pub sort: SortKey,
    pub cart_count: u32,
}

/// The "load more" button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadMoreButton {
    pub disabled: bool,
    pub label: String,
}

pub struct ProductsPage {
    catalog: CatalogSnapshot,
    state: FilterSortState,
    ledger: CartLedger,
    bus: Arc<SiteBus>,
    events: Subscription<SiteEvent>,
    load_more: LoadMoreButton,
}

impl ProductsPage {
    pub fn new(catalog: CatalogSnapshot, store: Arc<PreferenceStore>, bus: Arc<SiteBus>) -> Self {
        let events = bus.subscribe();
        Self {
            catalog,
            state: FilterSortState::default(),
            ledger: CartLedger::load(store),
            bus,
            events,
            load_more: LoadMoreButton {
                disabled: false,
                label: String::new(),
            },
        }
    }

    pub fn state(&self) -> &FilterSortState {
        &self.state
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn load_more_button(&self) -> &LoadMoreButton {
        &self.load_more
    }

    /// Apply one interaction.
    ///
    /// `AddToCart` for a product missing from the snapshot is rejected with
    /// `NotFound` and changes nothing.
    pub fn handle(
        &mut self,
        event: &SiteEvent,
        locale: &LocaleResolver,
        notifications: &mut NotificationCenter,
    ) -> DomainResult<()> {
        match event {
            SiteEvent::FilterChanged { filter } => {
                self.state.filter = Filter::parse(filter);
                tracing::debug!(filter = self.state.filter.as_str(), "listing filter changed");
            }
            SiteEvent::SortChanged { sort } => {
                self.state.sort = SortKey::parse_or_default(sort);
                tracing::debug!(sort = self.state.sort.as_str(), "listing sort changed");
            }
            SiteEvent::FiltersReset => {
                self.state.reset();
                tracing::debug!("listing filters reset");
            }
            SiteEvent::AddToCart { product_id } => {
                self.add_to_cart(product_id, locale, notifications)?;
            }
            SiteEvent::CartUpdated { .. } => self.ledger.reload(),
            SiteEvent::LanguageChanged { .. } => {}
        }
        Ok(())
    }

    /// Process broadcasts from other controllers (cart writes, language).
    pub fn sync(&mut self, locale: &LocaleResolver, notifications: &mut NotificationCenter) {
        for event in self.events.drain() {
            if let Err(err) = self.handle(&event, locale, notifications) {
                tracing::warn!(error = %err, "failed to apply broadcast event");
            }
        }
    }

    pub fn render(&self) -> ProductsView {
        let visible = self.state.apply(&self.catalog);
        ProductsView {
            grid: ProductGridView::from_products(&visible),
            filter: self.state.filter.as_str().to_string(),
            sort: self.state.sort,
            cart_count: self.ledger.total_quantity(),
        }
    }

    /// Quick view has no detail modal yet; tell the visitor.
    pub fn quick_view(
        &self,
        product_id: &ProductId,
        locale: &LocaleResolver,
        notifications: &mut NotificationCenter,
    ) {
        tracing::debug!(product = %product_id, "quick view requested");
        notifications.info(locale.translate("quick_view_soon"));
    }

    /// Simulated request for another page of products.
    ///
    /// The button is disabled with a loading label for `latency`, then
    /// restored, and an informational notification is shown.
    pub async fn load_more(
        &mut self,
        latency: Duration,
        locale: &LocaleResolver,
        notifications: &mut NotificationCenter,
    ) {
        self.load_more = LoadMoreButton {
            disabled: true,
            label: locale.translate("load_more_loading").to_string(),
        };

        tokio::time::sleep(latency).await;

        notifications.info(locale.translate("load_more_soon"));
        self.load_more = LoadMoreButton {
            disabled: false,
            label: locale.translate("load_more").to_string(),
        };
    }

    fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        locale: &LocaleResolver,
        notifications: &mut NotificationCenter,
    ) -> DomainResult<()> {
        let product = self.catalog.find(product_id).ok_or_else(DomainError::not_found)?;

        self.ledger
            .add_item(product.id.clone(), product.name.clone(), product.price)?;

        let total_quantity = self.ledger.total_quantity();
        if let Err(err) = self.bus.publish(SiteEvent::CartUpdated { total_quantity }) {
            tracing::warn!(error = ?err, "failed to broadcast cart update");
        }

        notifications.push(Notification::new(
            NotificationKind::CartAdded,
            Some(locale.translate("cart_added_title").to_string()),
            locale.translate_with("cart_added_message", &[("product", &product.name)]),
        ));
        Ok(())
    }
}
