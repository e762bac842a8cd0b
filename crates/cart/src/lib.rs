//! Cart domain: line items, the cart aggregate and the write-through ledger.
//!
//! The ledger persisted under `nesh_cart` is the source of truth; the item
//! count under `nesh_cart_count` is a cache rewritten on every mutation.

pub mod badge;
pub mod cart;
pub mod ledger;
pub mod line;

pub use badge::CartBadge;
pub use cart::{AddItem, Cart, CartCommand, CartEvent, LineAdded, QuantityIncremented};
pub use ledger::CartLedger;
pub use line::CartLine;
