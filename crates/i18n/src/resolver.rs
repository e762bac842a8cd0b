//! Active language, lookups and language switching.

use std::sync::Arc;

use nesh_core::Language;
use nesh_events::{EventBus, SiteBus, SiteEvent};
use nesh_storage::PreferenceStore;

use crate::dictionary::Dictionary;
use crate::error::LocaleError;

/// Outcome of a language switch request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LanguageChange {
    /// The language was applied, persisted and broadcast.
    Changed(Language),
    /// The requested language was already active; nothing happened.
    Unchanged(Language),
}

/// Resolves translation keys for the active language.
///
/// Lookups never fail: an unknown key resolves to itself.
#[derive(Debug)]
pub struct LocaleResolver {
    current: Language,
    store: Arc<PreferenceStore>,
    bus: Arc<SiteBus>,
}

impl LocaleResolver {
    /// Resolver in the default language; nothing is applied yet.
    pub fn new(store: Arc<PreferenceStore>, bus: Arc<SiteBus>) -> Self {
        Self {
            current: Language::default(),
            store,
            bus,
        }
    }

    /// Build a resolver and materialize the persisted language.
    pub fn initialize(store: Arc<PreferenceStore>, bus: Arc<SiteBus>, fallback: Language) -> Self {
        let mut resolver = Self::new(store, bus);
        resolver.load_preference(fallback);
        resolver
    }

    /// Apply the stored language, or `fallback` when absent or invalid.
    ///
    /// Always re-applies (persist + broadcast), even when the language equals
    /// the current one, so freshly rendered text picks it up.
    pub fn load_preference(&mut self, fallback: Language) -> Language {
        let language = match self.store.language_code() {
            Some(code) => code.parse().unwrap_or_else(|_| {
                tracing::warn!(code = %code, "stored language is not supported; using fallback");
                fallback
            }),
            None => fallback,
        };
        self.apply(language);
        language
    }

    /// Switch to the language identified by `code`.
    ///
    /// Unsupported codes are rejected without touching state or storage.
    pub fn set_language(&mut self, code: &str) -> Result<LanguageChange, LocaleError> {
        let language: Language = code.parse().map_err(|_| {
            tracing::warn!(code, "invalid language code");
            LocaleError::UnsupportedLanguage(code.to_string())
        })?;

        if language == self.current {
            return Ok(LanguageChange::Unchanged(language));
        }

        self.apply(language);
        Ok(LanguageChange::Changed(language))
    }

    fn apply(&mut self, language: Language) {
        self.current = language;
        self.store.set_language_code(language.code());

        if let Err(err) = self.bus.publish(SiteEvent::LanguageChanged { language }) {
            tracing::warn!(error = ?err, "failed to broadcast language change");
        }
        tracing::info!(language = language.code(), "language changed");
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        Dictionary::for_language(self.current)
    }

    /// Text for `key` in the active language, or `key` itself when unknown.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.translation_in(key, self.current)
    }

    /// Text for `key` in an explicit language, or `key` itself when unknown.
    pub fn translation_in<'a>(&self, key: &'a str, language: Language) -> &'a str {
        match Dictionary::for_language(language).get(key) {
            Some(text) => text,
            None => key,
        }
    }

    /// Translate and substitute `{name}` placeholders.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Placeholder for a form input named `field` (`form_<field>`), if defined.
    pub fn form_placeholder(&self, field: &str) -> Option<&'static str> {
        self.dictionary().get(&format!("form_{field}"))
    }

    /// Document title for the active language.
    pub fn page_title(&self) -> &'static str {
        self.dictionary().get("page_title").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nesh_events::Subscription;

    fn setup() -> (LocaleResolver, Arc<PreferenceStore>, Subscription<SiteEvent>) {
        let store = Arc::new(PreferenceStore::in_memory());
        let bus = Arc::new(SiteBus::new());
        let events = bus.subscribe();
        (LocaleResolver::new(store.clone(), bus), store, events)
    }

    #[test]
    fn unknown_keys_resolve_to_themselves() {
        let (resolver, _, _) = setup();
        assert_eq!(resolver.translate("no_such_key"), "no_such_key");
        assert_eq!(resolver.translation_in("", Language::Am), "");
    }

    #[test]
    fn switching_persists_and_broadcasts() {
        let (mut resolver, store, events) = setup();

        let change = resolver.set_language("am").unwrap();
        assert_eq!(change, LanguageChange::Changed(Language::Am));
        assert_eq!(resolver.translate("nav_home"), "መነሻ");
        assert_eq!(store.language_code().as_deref(), Some("am"));
        assert_eq!(
            events.drain(),
            vec![SiteEvent::LanguageChanged { language: Language::Am }]
        );
    }

    #[test]
    fn unsupported_code_changes_nothing() {
        let (mut resolver, store, events) = setup();
        resolver.set_language("am").unwrap();
        events.drain();

        let err = resolver.set_language("fr").unwrap_err();
        assert_eq!(err, LocaleError::UnsupportedLanguage("fr".to_string()));
        assert_eq!(resolver.current(), Language::Am);
        assert_eq!(store.language_code().as_deref(), Some("am"));
        assert!(events.drain().is_empty());
    }

    #[test]
    fn reselecting_the_active_language_is_a_no_op() {
        let (mut resolver, _, events) = setup();
        assert_eq!(
            resolver.set_language("en").unwrap(),
            LanguageChange::Unchanged(Language::En)
        );
        assert!(events.drain().is_empty());
    }

    #[test]
    fn initial_load_reapplies_even_the_default() {
        let (mut resolver, store, events) = setup();
        assert_eq!(resolver.load_preference(Language::En), Language::En);
        assert_eq!(store.language_code().as_deref(), Some("en"));
        assert_eq!(events.drain().len(), 1);
    }

    #[test]
    fn initial_load_restores_the_stored_language() {
        let (mut resolver, store, _) = setup();
        store.set_language_code("am");
        assert_eq!(resolver.load_preference(Language::En), Language::Am);
        assert_eq!(resolver.current(), Language::Am);
    }

    #[test]
    fn invalid_stored_language_falls_back() {
        let (mut resolver, store, _) = setup();
        store.set_language_code("xx");
        assert_eq!(resolver.load_preference(Language::En), Language::En);
        assert_eq!(store.language_code().as_deref(), Some("en"));
    }

    #[test]
    fn placeholders_and_titles_follow_the_language() {
        let (mut resolver, _, _) = setup();
        assert_eq!(resolver.form_placeholder("email"), Some("Email Address"));
        assert_eq!(resolver.form_placeholder("phone"), None);
        resolver.set_language("am").unwrap();
        assert_eq!(resolver.form_placeholder("name"), Some("ስምዎ"));
        assert_eq!(resolver.page_title(), "ኔሽ | የኢትዮጵያ ዋና የምግብ ስርዓት");
    }

    #[test]
    fn templates_substitute_named_arguments() {
        let (resolver, _, _) = setup();
        assert_eq!(
            resolver.translate_with("cart_added_message", &[("product", "Teff Flour")]),
            "Teff Flour added to your cart"
        );
        assert_eq!(resolver.translate_with("unknown {x}", &[("x", "1")]), "unknown 1");
    }
}
