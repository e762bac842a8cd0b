//! Page controllers and site-level features.
//!
//! - `products_page` / `header`: independent controllers synchronized
//!   through the site bus
//! - `contact`: contact form validation and simulated submission
//! - `dashboard`: simulated live operations figures
//! - `notification`: transient toasts shown by all of the above

pub mod config;
pub mod contact;
pub mod context;
pub mod dashboard;
pub mod header;
pub mod notification;
pub mod products_page;
pub mod text;

pub use config::SiteConfig;
pub use contact::{ContactError, ContactForm, ContactMessage, MessageTransport, SimulatedTransport};
pub use context::SiteContext;
pub use dashboard::{Dashboard, MetricKind, RandomVariation, VariationSource};
pub use header::{HeaderView, SiteHeader};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use products_page::{ProductsPage, ProductsView};
pub use text::{ElementKind, TextBinding, TextUpdate};
