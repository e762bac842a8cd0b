//! Write-through cart ledger.

use std::sync::Arc;

use nesh_core::{DomainResult, Price, ProductId};
use nesh_storage::PreferenceStore;

use crate::cart::{AddItem, Cart, CartCommand, CartEvent};
use crate::line::{CartLine, decode_lines};

/// A page controller's view of the cart.
///
/// Every controller hydrates its own ledger from the preference store; there
/// is no shared live instance. Each mutation persists the full ledger and the
/// derived item count before returning.
#[derive(Debug)]
pub struct CartLedger {
    cart: Cart,
    store: Arc<PreferenceStore>,
}

impl CartLedger {
    /// Hydrate from storage. Absent or malformed data yields an empty cart.
    pub fn load(store: Arc<PreferenceStore>) -> Self {
        let lines = store
            .cart_json()
            .and_then(|raw| decode_lines(&raw))
            .unwrap_or_default();
        tracing::debug!(lines = lines.len(), "cart ledger hydrated");

        Self {
            cart: Cart::from_lines(lines),
            store,
        }
    }

    /// Add one unit of a product, merging with an existing line.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Price,
    ) -> DomainResult<Vec<CartEvent>> {
        let command = CartCommand::AddItem(AddItem {
            product_id,
            name: name.into(),
            unit_price,
        });

        let events = nesh_events::execute(&mut self.cart, &command)?;
        self.persist();

        tracing::debug!(total_quantity = self.total_quantity(), "cart item added");
        Ok(events)
    }

    /// Re-read the persisted ledger (e.g. after another controller wrote it).
    pub fn reload(&mut self) {
        *self = Self::load(self.store.clone());
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn total_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }

    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    fn persist(&self) {
        match serde_json::to_string(self.cart.lines()) {
            Ok(json) => self.store.set_cart(&json, self.total_quantity()),
            Err(err) => tracing::warn!(error = %err, "failed to encode cart ledger"),
        }
    }
}
