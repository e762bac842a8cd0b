//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. `Price` is one;
/// a `CartLine` is not (it is identified by its product).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative decimal price, in whole currency units (e.g. `3.5` ETB).
///
/// Serialized as a plain JSON number. Deserializing a negative or non-finite
/// number fails, which lets callers treat such records as malformed.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    /// Parse a price attribute the way a listing exposes it.
    ///
    /// The leading number is used and trailing text ignored (`"12 ETB"` is
    /// 12). Anything missing, non-numeric, negative or non-finite becomes zero.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(leading_number)
            .and_then(|amount| Self::new(amount).ok())
            .unwrap_or(Self::ZERO)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Extended price for `quantity` units.
    pub fn times(&self, quantity: u32) -> f64 {
        self.0 * f64::from(quantity)
    }

    /// Total order over prices (always well defined since NaN is rejected).
    pub fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Longest prefix of `raw` (after leading whitespace) that reads as a decimal
/// number: sign, digits, fraction, exponent.
fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
