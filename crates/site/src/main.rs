use anyhow::Context;
use nesh_catalog::{CatalogSnapshot, ListingEntry};
use nesh_core::ProductId;
use nesh_events::SiteEvent;
use nesh_site::{
    ContactForm, ContactMessage, Dashboard, ElementKind, ProductsPage, RandomVariation, SimulatedTransport,
    SiteConfig, SiteContext, SiteHeader, TextBinding,
};

fn listing() -> Vec<ListingEntry> {
    let entry = |id: &str, name: &str, category: &str, price: &str, new: bool| ListingEntry {
        category: Some(category.to_string()),
        price: Some(price.to_string()),
        new: Some(new.to_string()),
        name: Some(name.to_string()),
        ..ListingEntry::new(ProductId::new(id))
    };
    vec![
        entry("bakery-sourdough", "Artisan Sourdough", "bakery", "180", false),
        entry("dairy-yogurt", "Highland Yogurt", "dairy", "95.5", true),
        entry("teff-injera", "Ivory Teff Injera", "teff", "60", true),
        entry("bakery-croissant", "Butter Croissant", "bakery", "75", false),
    ]
}

fn header_bindings() -> Vec<TextBinding> {
    vec![
        TextBinding::key("navHome", ElementKind::Text, "nav_home"),
        TextBinding::key("navProducts", ElementKind::Text, "nav_products"),
        TextBinding::key("navCart", ElementKind::Text, "nav_cart"),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nesh_observability::init();

    let config = SiteConfig::from_env();
    let latency = config.simulated_latency;
    let mut site = SiteContext::bootstrap(config);

    let mut header = SiteHeader::new(site.store.clone(), &site.bus, header_bindings(), &site.locale);
    let mut products = ProductsPage::new(
        CatalogSnapshot::build(&listing()),
        site.store.clone(),
        site.bus.clone(),
    );

    let interactions = [
        SiteEvent::FilterChanged {
            filter: "bakery".to_string(),
        },
        SiteEvent::SortChanged {
            sort: "price-low".to_string(),
        },
        SiteEvent::AddToCart {
            product_id: ProductId::new("bakery-croissant"),
        },
        SiteEvent::FiltersReset,
        SiteEvent::AddToCart {
            product_id: ProductId::new("dairy-yogurt"),
        },
    ];
    for event in &interactions {
        products
            .handle(event, &site.locale, &mut site.notifications)
            .with_context(|| format!("handling {event:?}"))?;
        header.sync(&site.locale);
    }

    let view = products.render();
    tracing::info!(ids = ?view.grid.ids, cart_count = view.cart_count, "products rendered");

    header
        .select_language("am", &mut site.locale)
        .context("switching language")?;
    products.sync(&site.locale, &mut site.notifications);
    tracing::info!(header = ?header.render(), "header rendered");

    products
        .load_more(latency, &site.locale, &mut site.notifications)
        .await;

    let mut contact = ContactForm::new(SimulatedTransport::new(latency), &site.locale);
    contact.fields = ContactMessage {
        name: "Demo Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        subject: "Partnership".to_string(),
        message: "Hello from the demo".to_string(),
    };
    contact
        .submit(&site.locale, &mut site.notifications)
        .await
        .context("submitting contact form")?;

    let mut dashboard = Dashboard::new();
    dashboard.apply_variation(&mut RandomVariation);
    for metric in dashboard.metrics() {
        tracing::info!(
            metric = site.locale.translate(metric.kind.label_key()),
            value = %metric.counter_text(),
            progress = %metric.percent_text(),
            "dashboard metric"
        );
    }

    for notification in site.notifications.active() {
        tracing::info!(kind = ?notification.kind, title = ?notification.title, message = %notification.message, "notification");
    }

    Ok(())
}
