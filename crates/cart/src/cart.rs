use serde::{Deserialize, Serialize};

use nesh_core::{Aggregate, DomainError, Price, ProductId};
use nesh_events::Event;

use crate::line::{CartLine, total_quantity};

/// Aggregate: the cart's line items.
///
/// Additive only: there is no removal or decrement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted lines (version starts at zero).
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines, version: 0 }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    pub fn total_quantity(&self) -> u32 {
        total_quantity(&self.lines)
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
}

/// Event: LineAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAdded {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
}

/// Event: QuantityIncremented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityIncremented {
    pub product_id: ProductId,
    /// Quantity after the increment.
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    QuantityIncremented(QuantityIncremented),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::QuantityIncremented(_) => "cart.line.quantity_incremented",
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineAdded(e) => {
                self.lines.push(CartLine {
                    product_id: e.product_id.clone(),
                    name: e.name.clone(),
                    unit_price: e.unit_price,
                    quantity: 1,
                });
            }
            CartEvent::QuantityIncremented(e) => {
                if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == e.product_id) {
                    line.quantity = e.quantity;
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add_item(cmd),
        }
    }
}

impl Cart {
    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        if cmd.product_id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("cart lines need a product id"));
        }

        // First-seen name/price snapshot wins on repeat adds.
        if let Some(line) = self.line(&cmd.product_id) {
            let quantity = line
                .quantity
                .checked_add(1)
                .ok_or_else(|| DomainError::invariant("cart line quantity overflow"))?;
            return Ok(vec![CartEvent::QuantityIncremented(QuantityIncremented {
                product_id: cmd.product_id.clone(),
                quantity,
            })]);
        }

        Ok(vec![CartEvent::LineAdded(LineAdded {
            product_id: cmd.product_id.clone(),
            name: cmd.name.clone(),
            unit_price: cmd.unit_price,
        })])
    }
}
