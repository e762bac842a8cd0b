use std::sync::Arc;
use std::time::Duration;

use nesh_catalog::{CatalogSnapshot, ListingEntry};
use nesh_core::{Language, ProductId};
use nesh_events::{EventBus, SiteEvent};
use nesh_site::{
    ElementKind, NotificationKind, ProductsPage, SiteConfig, SiteContext, SiteHeader, TextBinding,
};
use nesh_storage::{InMemoryStorage, PreferenceStore};

fn catalog() -> CatalogSnapshot {
    let entry = |id: &str, name: &str, price: &str| ListingEntry {
        category: Some("dairy".to_string()),
        price: Some(price.to_string()),
        name: Some(name.to_string()),
        ..ListingEntry::new(ProductId::new(id))
    };
    CatalogSnapshot::build(&[entry("milk", "Milk", "3.5"), entry("butter", "Butter", "7")])
}

fn bindings() -> Vec<TextBinding> {
    vec![TextBinding::key("navCart", ElementKind::Text, "nav_cart")]
}

fn add(product: &str) -> SiteEvent {
    SiteEvent::AddToCart {
        product_id: ProductId::new(product),
    }
}

#[test]
fn header_badge_follows_listing_adds() {
    let mut site = SiteContext::bootstrap(SiteConfig::default());
    let mut header = SiteHeader::new(site.store.clone(), &site.bus, bindings(), &site.locale);
    let mut page = ProductsPage::new(catalog(), site.store.clone(), site.bus.clone());

    page.handle(&add("milk"), &site.locale, &mut site.notifications).unwrap();
    page.handle(&add("milk"), &site.locale, &mut site.notifications).unwrap();
    page.handle(&add("butter"), &site.locale, &mut site.notifications).unwrap();

    assert_eq!(header.render().cart_badge, "0");
    header.sync(&site.locale);
    assert_eq!(header.render().cart_badge, "3");
    assert_eq!(page.render().cart_count, 3);
    assert_eq!(site.store.cart_count(), Some(3));
}

#[test]
fn two_listing_controllers_converge_through_the_bus() {
    let mut site = SiteContext::bootstrap(SiteConfig::default());
    let mut left = ProductsPage::new(catalog(), site.store.clone(), site.bus.clone());
    let mut right = ProductsPage::new(catalog(), site.store.clone(), site.bus.clone());

    left.handle(&add("milk"), &site.locale, &mut site.notifications).unwrap();
    right.sync(&site.locale, &mut site.notifications);
    right.handle(&add("milk"), &site.locale, &mut site.notifications).unwrap();
    left.sync(&site.locale, &mut site.notifications);

    assert_eq!(left.ledger().lines(), right.ledger().lines());
    assert_eq!(left.ledger().lines()[0].quantity, 2);
    assert_eq!(left.render().cart_count, 2);
}

#[test]
fn language_switch_reaches_every_controller() {
    let mut site = SiteContext::bootstrap(SiteConfig::default());
    let mut header = SiteHeader::new(site.store.clone(), &site.bus, bindings(), &site.locale);
    let mut page = ProductsPage::new(catalog(), site.store.clone(), site.bus.clone());
    let observer = site.bus.subscribe();

    site.locale.set_language("am").unwrap();
    header.sync(&site.locale);
    page.sync(&site.locale, &mut site.notifications);

    assert_eq!(
        observer.drain(),
        [SiteEvent::LanguageChanged {
            language: Language::Am
        }]
    );
    assert_eq!(header.render().active_switch, "langAM");

    page.handle(&add("butter"), &site.locale, &mut site.notifications).unwrap();
    let toast = site.notifications.latest().unwrap();
    assert_eq!(toast.kind, NotificationKind::CartAdded);
    assert_eq!(
        toast.message,
        site.locale.translate_with("cart_added_message", &[("product", "Butter")])
    );
    assert_ne!(toast.message, "Butter added to your cart");
}

#[test]
fn unavailable_storage_keeps_the_session_working() {
    let backend = Arc::new(InMemoryStorage::new());
    backend.set_unavailable(true);
    let store = Arc::new(PreferenceStore::new(backend));
    let bus = Arc::new(nesh_events::SiteBus::new());
    let locale = nesh_i18n::LocaleResolver::initialize(store.clone(), bus.clone(), Language::En);
    let mut notifications = nesh_site::NotificationCenter::new();

    let mut header = SiteHeader::new(store.clone(), &bus, bindings(), &locale);
    let mut page = ProductsPage::new(catalog(), store.clone(), bus.clone());
    page.handle(&add("milk"), &locale, &mut notifications).unwrap();
    header.sync(&locale);

    assert!(store.is_degraded());
    assert_eq!(header.render().cart_badge, "1");
}

#[tokio::test]
async fn load_more_then_contact_share_one_notification_center() {
    let mut site = SiteContext::bootstrap(SiteConfig {
        simulated_latency: Duration::from_millis(5),
        ..SiteConfig::default()
    });
    let mut page = ProductsPage::new(catalog(), site.store.clone(), site.bus.clone());
    page.load_more(site.config.simulated_latency, &site.locale, &mut site.notifications)
        .await;

    let mut form = nesh_site::ContactForm::new(
        nesh_site::SimulatedTransport::new(site.config.simulated_latency),
        &site.locale,
    );
    let _ = form.submit(&site.locale, &mut site.notifications).await;

    let kinds: Vec<NotificationKind> = site.notifications.active().iter().map(|n| n.kind).collect();
    assert_eq!(kinds, [NotificationKind::Info, NotificationKind::Error]);
}
