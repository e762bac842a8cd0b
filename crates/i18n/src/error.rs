use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The requested code is not one of the supported languages.
    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),
}
