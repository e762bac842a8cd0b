use serde::{Deserialize, Serialize};

use nesh_core::{Entity, Price, ProductId};

/// Attributes exposed by one rendered product listing element.
///
/// Mirrors the markup: `data-product` on the add-to-cart control,
/// `data-category`, `data-price` and `data-new` on the card, and the text of
/// the name element. Everything except the id is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub product: ProductId,
    pub category: Option<String>,
    pub price: Option<String>,
    pub new: Option<String>,
    pub name: Option<String>,
}

impl ListingEntry {
    /// Entry carrying only an id; every other attribute is missing.
    pub fn new(product: ProductId) -> Self {
        Self {
            product,
            category: None,
            price: None,
            new: None,
            name: None,
        }
    }
}

/// A sellable item as currently displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub is_new: bool,
}

impl Entity for ProductDescriptor {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl From<&ListingEntry> for ProductDescriptor {
    fn from(entry: &ListingEntry) -> Self {
        Self {
            id: entry.product.clone(),
            name: entry.name.as_deref().map(str::trim).unwrap_or_default().to_string(),
            category: entry.category.clone().unwrap_or_default(),
            price: Price::parse_lenient(entry.price.as_deref()),
            is_new: entry.new.as_deref() == Some("true"),
        }
    }
}

/// Immutable, ordered list of the products on the current page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    products: Vec<ProductDescriptor>,
}

impl CatalogSnapshot {
    /// One descriptor per entry, in presentation order. Never fails.
    pub fn build<'a>(entries: impl IntoIterator<Item = &'a ListingEntry>) -> Self {
        let products: Vec<ProductDescriptor> =
            entries.into_iter().map(ProductDescriptor::from).collect();
        tracing::debug!(products = products.len(), "catalog snapshot built");
        Self { products }
    }

    pub fn from_descriptors(products: Vec<ProductDescriptor>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[ProductDescriptor] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&ProductDescriptor> {
        self.products.iter().find(|p| &p.id == id)
    }
}
