//! Site events and the in-process pub/sub used between page controllers.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;
pub mod site_event;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use site_event::SiteEvent;

/// Bus shared by the controllers of one page.
pub type SiteBus = InMemoryEventBus<SiteEvent>;
