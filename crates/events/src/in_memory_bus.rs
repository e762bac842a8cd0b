//! In-memory event bus shared by the controllers of one page.

use std::sync::{Mutex, mpsc};

use crate::bus::{EventBus, Subscription};
use crate::event::Event;

#[derive(Debug)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    Poisoned,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Fan-out happens inside `publish`
/// - Dropped subscriptions are pruned on the next publish
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions (as of the last publish).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Event,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        let event_type = message.event_type();
        subs.retain(|tx| tx.send(message.clone()).is_ok());
        tracing::trace!(event_type, subscribers = subs.len(), "event published");

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SiteEvent;
    use nesh_core::Language;

    #[test]
    fn every_subscriber_receives_each_message_in_order() {
        let bus = InMemoryEventBus::new();
        let header = bus.subscribe();
        let listing = bus.subscribe();

        bus.publish(SiteEvent::CartUpdated { total_quantity: 1 }).unwrap();
        bus.publish(SiteEvent::LanguageChanged { language: Language::Am }).unwrap();

        let expected = vec![
            SiteEvent::CartUpdated { total_quantity: 1 },
            SiteEvent::LanguageChanged { language: Language::Am },
        ];
        assert_eq!(header.drain(), expected);
        assert_eq!(listing.drain(), expected);
        assert!(header.drain().is_empty());
    }

    #[test]
    fn late_subscribers_miss_earlier_messages() {
        let bus = InMemoryEventBus::new();
        bus.publish(SiteEvent::FiltersReset).unwrap();

        let late = bus.subscribe();
        assert!(late.try_recv().is_err());
    }

    #[test]
    fn dropped_subscriptions_are_pruned() {
        let bus = InMemoryEventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(SiteEvent::FiltersReset).unwrap();
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.drain().len(), 1);
    }
}
