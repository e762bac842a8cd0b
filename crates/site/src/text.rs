//! Translatable elements and the text updates produced for them.

use nesh_i18n::{InlineText, LocaleResolver};
use serde::{Deserialize, Serialize};

/// What kind of element carries the text; decides which property is set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Text,
    Input,
    TextArea,
    Image,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTarget {
    TextContent,
    Placeholder,
    Alt,
}

impl ElementKind {
    fn target(&self) -> TextTarget {
        match self {
            ElementKind::Text => TextTarget::TextContent,
            ElementKind::Input | ElementKind::TextArea => TextTarget::Placeholder,
            ElementKind::Image => TextTarget::Alt,
        }
    }
}

/// Where an element's text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// A dictionary key (`data-translate`).
    Key(String),
    /// Per-language texts carried on the element (`data-en` / `data-am`).
    Inline(InlineText),
    /// A contact form field; resolved through `form_<name>`.
    FormField(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBinding {
    pub element_id: String,
    pub kind: ElementKind,
    pub source: TextSource,
}

impl TextBinding {
    pub fn key(element_id: impl Into<String>, kind: ElementKind, key: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            kind,
            source: TextSource::Key(key.into()),
        }
    }

    pub fn inline(element_id: impl Into<String>, kind: ElementKind, text: InlineText) -> Self {
        Self {
            element_id: element_id.into(),
            kind,
            source: TextSource::Inline(text),
        }
    }

    pub fn form_field(element_id: impl Into<String>, kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            kind,
            source: TextSource::FormField(name.into()),
        }
    }

    /// Text for the active language. `None` leaves the element untouched.
    fn resolve(&self, locale: &LocaleResolver) -> Option<String> {
        match &self.source {
            TextSource::Key(key) => locale.dictionary().get(key).map(str::to_string),
            TextSource::Inline(text) => text.pick(locale.current()).map(str::to_string),
            TextSource::FormField(name) => locale.form_placeholder(name).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextUpdate {
    pub element_id: String,
    pub target: TextTarget,
    pub text: String,
}

/// Text updates for every binding that resolves in the active language.
///
/// Keys missing from the dictionary and empty inline texts produce no update,
/// so the element keeps whatever it currently shows.
pub fn render_text(bindings: &[TextBinding], locale: &LocaleResolver) -> Vec<TextUpdate> {
    bindings
        .iter()
        .filter_map(|binding| {
            binding.resolve(locale).map(|text| TextUpdate {
                element_id: binding.element_id.clone(),
                target: binding.kind.target(),
                text,
            })
        })
        .collect()
}
