use serde::{Deserialize, Serialize};

use nesh_core::Language;

/// Texts carried inline by an element (`data-en` / `data-am` attributes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineText {
    pub en: Option<String>,
    pub am: Option<String>,
}

impl InlineText {
    pub fn new(en: impl Into<String>, am: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            am: Some(am.into()),
        }
    }

    /// Text for `language`; `None` (leave the element alone) when missing or empty.
    pub fn pick(&self, language: Language) -> Option<&str> {
        let text = match language {
            Language::En => self.en.as_deref(),
            Language::Am => self.am.as_deref(),
        };
        text.filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_active_language_only() {
        let text = InlineText {
            en: Some("Cart".to_string()),
            am: None,
        };
        assert_eq!(text.pick(Language::En), Some("Cart"));
        assert_eq!(text.pick(Language::Am), None);
    }

    #[test]
    fn empty_attribute_counts_as_missing() {
        let text = InlineText::new("", "ጋሪ");
        assert_eq!(text.pick(Language::En), None);
        assert_eq!(text.pick(Language::Am), Some("ጋሪ"));
    }
}
