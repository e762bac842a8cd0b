use serde::{Deserialize, Serialize};

use nesh_core::{Entity, Price, ProductId};

/// One product's quantity in the cart.
///
/// `name` and `unit_price` are a snapshot taken when the product was first
/// added; later adds only bump `quantity`.
///
/// Stored as `{productId, name, unitPrice, quantity}`. The older
/// `{id, name, price, quantity}` shape is accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(alias = "id")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: Price,
    pub quantity: u32,
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price.times(self.quantity)
    }
}

/// Decode a persisted ledger.
///
/// Returns `None` when the JSON is malformed. Zero-quantity records are
/// dropped and repeated product ids are folded into the first occurrence, so
/// the result always satisfies the one-line-per-product invariant.
pub(crate) fn decode_lines(raw: &str) -> Option<Vec<CartLine>> {
    let records: Vec<CartLine> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "stored cart is malformed; starting with an empty cart");
            return None;
        }
    };

    let mut lines: Vec<CartLine> = Vec::with_capacity(records.len());
    for record in records {
        if record.quantity == 0 {
            tracing::debug!(product_id = %record.product_id, "dropping zero-quantity cart record");
            continue;
        }
        match lines.iter_mut().find(|l| l.same_entity(&record)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(record.quantity);
            }
            None => lines.push(record),
        }
    }
    Some(lines)
}

pub(crate) fn total_quantity(lines: &[CartLine]) -> u32 {
    lines.iter().fold(0u32, |acc, l| acc.saturating_add(l.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_legacy_record_shape() {
        let lines = decode_lines(r#"[{"id":"p1","name":"Bread","price":10,"quantity":2}]"#).unwrap();
        assert_eq!(lines[0].product_id, ProductId::new("p1"));
        assert_eq!(lines[0].unit_price.amount(), 10.0);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn writes_camel_case_records() {
        let line = CartLine {
            product_id: ProductId::new("x"),
            name: "Milk".to_string(),
            unit_price: Price::new(3.5).unwrap(),
            quantity: 1,
        };
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"productId":"x","name":"Milk","unitPrice":3.5,"quantity":1}"#);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(decode_lines("{not json").is_none());
        assert!(decode_lines(r#"{"productId":"x"}"#).is_none());
        assert!(decode_lines(r#"[{"productId":"x","name":"M","unitPrice":-1,"quantity":1}]"#).is_none());
    }

    #[test]
    fn duplicates_fold_and_empty_lines_drop() {
        let raw = r#"[
            {"productId":"a","name":"First","unitPrice":1,"quantity":1},
            {"productId":"b","name":"Gone","unitPrice":1,"quantity":0},
            {"productId":"a","name":"Second","unitPrice":9,"quantity":2}
        ]"#;
        let lines = decode_lines(raw).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "First");
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(total_quantity(&lines), 3);
    }
}
