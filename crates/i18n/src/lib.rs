//! English/Amharic text substitution.
//!
//! - `dictionary`: the two flat key → text tables
//! - `inline`: per-element `data-en` / `data-am` texts
//! - `resolver`: the active language, lookups and language switching

pub mod dictionary;
pub mod error;
pub mod inline;
pub mod resolver;

pub use dictionary::Dictionary;
pub use error::LocaleError;
pub use inline::InlineText;
pub use nesh_core::Language;
pub use resolver::{LanguageChange, LocaleResolver};
