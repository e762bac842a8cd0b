//! Shared storefront building blocks: ids, prices, languages and the error model.
//!
//! This crate contains **pure domain** primitives (no storage, no rendering).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod language;
pub mod value_object;

pub use aggregate::Aggregate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use language::Language;
pub use value_object::{Price, ValueObject};
