//! Site header: cart badge, language switch and page-wide text.

use std::sync::Arc;

use nesh_cart::CartBadge;
use nesh_core::Language;
use nesh_events::{EventBus, SiteBus, SiteEvent, Subscription};
use nesh_i18n::{LanguageChange, LocaleError, LocaleResolver};
use nesh_storage::PreferenceStore;
use serde::Serialize;

use crate::text::{TextBinding, TextUpdate, render_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub cart_badge: String,
    pub title: String,
    /// Element id of the highlighted language switch.
    pub active_switch: &'static str,
    pub text: Vec<TextUpdate>,
}

/// Header controller.
///
/// Never touches the cart ledger directly; it only reads the cached count
/// from the store when another controller announces a cart change.
pub struct SiteHeader {
    store: Arc<PreferenceStore>,
    events: Subscription<SiteEvent>,
    bindings: Vec<TextBinding>,
    badge: CartBadge,
    language: Language,
    title: String,
    text: Vec<TextUpdate>,
}

impl SiteHeader {
    pub fn new(
        store: Arc<PreferenceStore>,
        bus: &SiteBus,
        bindings: Vec<TextBinding>,
        locale: &LocaleResolver,
    ) -> Self {
        let mut header = Self {
            badge: CartBadge::read(&store),
            store,
            events: bus.subscribe(),
            bindings,
            language: locale.current(),
            title: String::new(),
            text: Vec::new(),
        };
        header.retranslate(locale);
        header
    }

    /// Language switch clicked.
    pub fn select_language(
        &mut self,
        code: &str,
        locale: &mut LocaleResolver,
    ) -> Result<LanguageChange, LocaleError> {
        let change = locale.set_language(code)?;
        self.sync(locale);
        Ok(change)
    }

    /// Catch up with broadcasts since the last call.
    pub fn sync(&mut self, locale: &LocaleResolver) {
        for event in self.events.drain() {
            match event {
                SiteEvent::CartUpdated { total_quantity } => {
                    self.badge = CartBadge::read(&self.store);
                    tracing::debug!(
                        announced = total_quantity,
                        badge = self.badge.count(),
                        "header cart badge refreshed"
                    );
                }
                SiteEvent::LanguageChanged { language } => {
                    self.language = language;
                    self.retranslate(locale);
                }
                _ => {}
            }
        }
    }

    pub fn badge(&self) -> CartBadge {
        self.badge
    }

    pub fn render(&self) -> HeaderView {
        HeaderView {
            cart_badge: self.badge.text(),
            title: self.title.clone(),
            active_switch: self.language.switch_id(),
            text: self.text.clone(),
        }
    }

    fn retranslate(&mut self, locale: &LocaleResolver) {
        self.title = locale.page_title().to_string();
        self.text = render_text(&self.bindings, locale);
    }
}
