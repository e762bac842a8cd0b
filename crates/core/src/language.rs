//! Supported display languages.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A supported site language.
///
/// The set is closed: anything other than `"en"` or `"am"` is rejected at
/// parse time, so a `Language` value is always one the dictionaries cover.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Am,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Am];

    /// Two-letter code as stored in preferences (`"en"`, `"am"`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Am => "am",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Am => "አማርኛ",
        }
    }

    /// Id of the language switch control (`langEN`, `langAM`).
    pub fn switch_id(&self) -> &'static str {
        match self {
            Language::En => "langEN",
            Language::Am => "langAM",
        }
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "am" => Ok(Language::Am),
            other => Err(DomainError::validation(format!(
                "unsupported language code: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn parsing_is_case_sensitive_and_closed() {
        assert!("fr".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
