//! Transient toast notifications.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Contact form accepted.
    Success,
    /// Validation or submission failure.
    Error,
    /// Informational message (load more, quick view).
    Info,
    /// A product was added to the cart.
    CartAdded,
}

impl NotificationKind {
    /// How long a notification of this kind stays visible.
    pub fn ttl(&self) -> TimeDelta {
        match self {
            NotificationKind::Success | NotificationKind::Error => TimeDelta::seconds(5),
            NotificationKind::Info | NotificationKind::CartAdded => TimeDelta::seconds(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub ttl: TimeDelta,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: Option<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            kind,
            title,
            message: message.into(),
            created_at: Utc::now(),
            ttl: kind.ttl(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.ttl
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        tracing::debug!(%id, kind = ?notification.kind, "notification shown");
        self.active.push(notification);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(Notification::new(NotificationKind::Success, None, message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.push(Notification::new(NotificationKind::Error, None, message))
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.push(Notification::new(NotificationKind::Info, None, message))
    }

    /// Remove a notification early. Returns whether it was still shown.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        before != self.active.len()
    }

    /// Drop everything whose time-to-live has elapsed at `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.active.len();
        self.active.retain(|n| !n.is_expired(now));
        before - self.active.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.active.last()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_depends_on_kind() {
        assert_eq!(NotificationKind::CartAdded.ttl(), TimeDelta::seconds(3));
        assert_eq!(NotificationKind::Info.ttl(), TimeDelta::seconds(3));
        assert_eq!(NotificationKind::Success.ttl(), TimeDelta::seconds(5));
        assert_eq!(NotificationKind::Error.ttl(), TimeDelta::seconds(5));
    }

    #[test]
    fn expire_removes_only_elapsed_notifications() {
        let mut center = NotificationCenter::new();
        let cart = center.push(Notification::new(
            NotificationKind::CartAdded,
            Some("Product Added!".to_string()),
            "Milk added to your cart",
        ));
        let form = center.error("Please fill in all required fields");
        let created = center.active()[0].created_at;

        assert_eq!(center.expire(created + TimeDelta::seconds(1)), 0);
        assert_eq!(center.expire(created + TimeDelta::seconds(4)), 1);
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].id, form);
        assert!(!center.dismiss(cart));

        assert_eq!(center.expire(created + TimeDelta::seconds(10)), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut center = NotificationCenter::new();
        let first = center.info("one");
        let second = center.info("two");

        assert!(center.dismiss(first));
        assert_eq!(center.len(), 1);
        assert_eq!(center.latest().map(|n| n.id), Some(second));
    }
}
