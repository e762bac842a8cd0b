//! Strongly-typed identifiers used across the storefront.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a sellable product (the `data-product` value of a listing).
///
/// Opaque: the only guarantee is that it is stable per product and unique
/// within one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an identifier that is already known to be valid.
    ///
    /// Prefer `str::parse` for values read from a listing or from storage.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let id: ProductId = "  teff-flour ".parse().unwrap();
        assert_eq!(id.as_str(), "teff-flour");
    }

    #[test]
    fn parse_rejects_blank_ids() {
        let err = "   ".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("p1")).unwrap();
        assert_eq!(json, "\"p1\"");
    }
}
