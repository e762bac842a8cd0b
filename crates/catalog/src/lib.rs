//! Catalog snapshot and the listing filter/sort pipeline.
//!
//! Pure logic: a snapshot is built once from the listing entries currently
//! rendered, then filtered and ordered without ever being mutated.

pub mod pipeline;
pub mod product;

pub use pipeline::{Filter, FilterSortState, ProductGridView, SortKey, apply};
pub use product::{CatalogSnapshot, ListingEntry, ProductDescriptor};
