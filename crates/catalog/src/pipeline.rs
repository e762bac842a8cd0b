//! Filter/sort pipeline over a catalog snapshot.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use nesh_core::ProductId;

use crate::product::{CatalogSnapshot, ProductDescriptor};

/// Reserved category value meaning "no filtering".
pub const ALL_CATEGORIES: &str = "all";

/// Category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Category(String),
}

impl Filter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            Filter::All
        } else {
            Filter::Category(raw.to_string())
        }
    }

    pub fn matches(&self, product: &ProductDescriptor) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => &product.category == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL_CATEGORIES,
            Filter::Category(category) => category,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// New products first, otherwise listing order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    /// New products first, otherwise listing order.
    Newest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
        }
    }

    /// Parse a sort selector value; unknown values select `Featured`.
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::debug!(value = raw, "unknown sort key, using featured");
            SortKey::Featured
        })
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "newest" => Ok(SortKey::Newest),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Filter + sort choice of one listing page. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSortState {
    pub filter: Filter,
    pub sort: SortKey,
}

impl FilterSortState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&self, catalog: &CatalogSnapshot) -> Vec<ProductDescriptor> {
        apply(catalog, &self.filter, self.sort)
    }
}

/// Filter then order the catalog. Pure; the snapshot is left untouched.
///
/// Entries the sort key considers equal keep their listing order.
pub fn apply(catalog: &CatalogSnapshot, filter: &Filter, sort: SortKey) -> Vec<ProductDescriptor> {
    let filtered: Vec<ProductDescriptor> = catalog
        .products()
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    match sort {
        SortKey::PriceLow => {
            let mut sorted = filtered;
            sorted.sort_by(|a, b| a.price.total_cmp(&b.price));
            sorted
        }
        SortKey::PriceHigh => {
            let mut sorted = filtered;
            sorted.sort_by(|a, b| b.price.total_cmp(&a.price));
            sorted
        }
        SortKey::Newest | SortKey::Featured => new_first(filtered),
    }
}

/// Stable partition: every new product, then every other one.
fn new_first(products: Vec<ProductDescriptor>) -> Vec<ProductDescriptor> {
    let (mut fresh, rest): (Vec<_>, Vec<_>) = products.into_iter().partition(|p| p.is_new);
    fresh.extend(rest);
    fresh
}

/// What the listing container should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductGridView {
    /// Product ids in display order.
    pub ids: Vec<ProductId>,
    /// True when nothing passed the filter; render the empty state instead.
    pub is_empty: bool,
}

impl ProductGridView {
    pub fn from_products(products: &[ProductDescriptor]) -> Self {
        Self {
            ids: products.iter().map(|p| p.id.clone()).collect(),
            is_empty: products.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nesh_core::Price;

    fn product(id: &str, category: &str, price: f64, is_new: bool) -> ProductDescriptor {
        ProductDescriptor {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            category: category.to_string(),
            price: Price::new(price).unwrap(),
            is_new,
        }
    }

    fn sample() -> CatalogSnapshot {
        CatalogSnapshot::from_descriptors(vec![
            product("a", "bakery", 12.0, false),
            product("b", "dairy", 8.0, true),
            product("c", "bakery", 5.0, true),
        ])
    }

    fn ids(products: &[ProductDescriptor]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn bakery_by_price_low() {
        let out = apply(&sample(), &Filter::parse("bakery"), SortKey::PriceLow);
        assert_eq!(ids(&out), vec!["c", "a"]);
    }

    #[test]
    fn all_featured_puts_new_first_in_listing_order() {
        let out = apply(&sample(), &Filter::All, SortKey::Featured);
        assert_eq!(ids(&out), vec!["b", "c", "a"]);
    }

    #[test]
    fn price_high_descends() {
        let out = apply(&sample(), &Filter::All, SortKey::PriceHigh);
        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let out = apply(&sample(), &Filter::parse("Bakery"), SortKey::Featured);
        assert!(out.is_empty());
        assert!(ProductGridView::from_products(&out).is_empty);
    }

    #[test]
    fn unknown_sort_values_fall_back_to_featured() {
        assert_eq!(SortKey::parse_or_default("alphabetical"), SortKey::Featured);
        assert_eq!(SortKey::parse_or_default("price-high"), SortKey::PriceHigh);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterSortState {
            filter: Filter::parse("dairy"),
            sort: SortKey::PriceHigh,
        };
        state.reset();
        assert_eq!(state.filter, Filter::All);
        assert_eq!(state.sort, SortKey::Featured);
        assert_eq!(state.filter.as_str(), "all");
    }

    #[test]
    fn apply_leaves_the_snapshot_untouched() {
        let catalog = sample();
        let before = catalog.clone();
        let _ = apply(&catalog, &Filter::All, SortKey::PriceLow);
        assert_eq!(catalog, before);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = (String, bool, u32)> {
            (
                prop_oneof![Just("bakery"), Just("dairy"), Just("teff")].prop_map(str::to_string),
                any::<bool>(),
                0u32..50,
            )
        }

        fn arb_catalog() -> impl Strategy<Value = CatalogSnapshot> {
            prop::collection::vec(arb_product(), 0..30).prop_map(|rows| {
                CatalogSnapshot::from_descriptors(
                    rows.into_iter()
                        .enumerate()
                        .map(|(i, (category, is_new, price))| {
                            product(&format!("p{i}"), &category, f64::from(price) / 2.0, is_new)
                        })
                        .collect(),
                )
            })
        }

        fn arb_sort() -> impl Strategy<Value = SortKey> {
            prop_oneof![
                Just(SortKey::Featured),
                Just(SortKey::PriceLow),
                Just(SortKey::PriceHigh),
                Just(SortKey::Newest),
            ]
        }

        fn position(catalog: &CatalogSnapshot, id: &ProductId) -> usize {
            catalog.products().iter().position(|p| &p.id == id).unwrap()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: "all" yields a permutation of the whole catalog.
            #[test]
            fn all_is_a_permutation(catalog in arb_catalog(), sort in arb_sort()) {
                let out = apply(&catalog, &Filter::All, sort);
                prop_assert_eq!(out.len(), catalog.len());

                let mut got: Vec<_> = out.iter().map(|p| p.id.clone()).collect();
                let mut want: Vec<_> = catalog.products().iter().map(|p| p.id.clone()).collect();
                got.sort();
                want.sort();
                prop_assert_eq!(got, want);
            }

            /// Property: a category filter keeps exactly the matching entries.
            #[test]
            fn category_filter_is_exact(
                catalog in arb_catalog(),
                sort in arb_sort(),
                category in prop_oneof![Just("bakery"), Just("dairy"), Just("teff"), Just("honey")],
            ) {
                let out = apply(&catalog, &Filter::parse(category), sort);
                prop_assert!(out.iter().all(|p| p.category == category));
                let expected = catalog.products().iter().filter(|p| p.category == category).count();
                prop_assert_eq!(out.len(), expected);
            }

            /// Property: price sorts are monotonic and stable among equal prices.
            #[test]
            fn price_sorts_are_monotonic_and_stable(catalog in arb_catalog()) {
                let low = apply(&catalog, &Filter::All, SortKey::PriceLow);
                for pair in low.windows(2) {
                    prop_assert!(pair[0].price <= pair[1].price);
                    if pair[0].price == pair[1].price {
                        prop_assert!(position(&catalog, &pair[0].id) < position(&catalog, &pair[1].id));
                    }
                }

                let high = apply(&catalog, &Filter::All, SortKey::PriceHigh);
                for pair in high.windows(2) {
                    prop_assert!(pair[0].price >= pair[1].price);
                    if pair[0].price == pair[1].price {
                        prop_assert!(position(&catalog, &pair[0].id) < position(&catalog, &pair[1].id));
                    }
                }
            }

            /// Property: featured/newest partition new-first and keep listing order per group.
            #[test]
            fn new_first_is_a_stable_partition(
                catalog in arb_catalog(),
                sort in prop_oneof![Just(SortKey::Featured), Just(SortKey::Newest)],
            ) {
                let out = apply(&catalog, &Filter::All, sort);

                let first_old = out.iter().position(|p| !p.is_new).unwrap_or(out.len());
                prop_assert!(out[first_old..].iter().all(|p| !p.is_new));

                for pair in out.windows(2) {
                    if pair[0].is_new == pair[1].is_new {
                        prop_assert!(position(&catalog, &pair[0].id) < position(&catalog, &pair[1].id));
                    }
                }
            }
        }
    }
}
