// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` holds at most one toast. A new push while one is visible
//! replaces it in place and restarts its timer; there is no queue.

use super::notification::{Notification, NotificationId, NotificationText, Severity};
use crate::config::TOAST_DURATION;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking the auto-dismiss timer.
    Tick,
}

/// Owns the single visible toast.
#[derive(Debug)]
pub struct Manager {
    current: Option<Notification>,
    duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_duration(TOAST_DURATION)
    }
}

impl Manager {
    /// Creates a manager with the default 2 s display duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Shows `notification`, replacing whatever is visible.
    pub fn push(&mut self, notification: Notification) {
        let label = match notification.text() {
            NotificationText::Key(key) => key.as_str(),
            NotificationText::Plain(text) => text.as_str(),
        };
        match notification.severity() {
            Severity::Success => tracing::debug!(message = label, "toast: success"),
            Severity::Warning => tracing::info!(message = label, "toast: warning"),
            Severity::Error => tracing::warn!(message = label, "toast: error"),
        }

        self.current = Some(notification);
    }

    /// Hides the toast if it is the one identified by `id`.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id() == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Hides the toast once its display duration has elapsed.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Same as [`Manager::tick`] with an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now, self.duration))
        {
            self.current = None;
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Returns the visible notification.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.is_visible());
        assert!(manager.current().is_none());
    }

    #[test]
    fn push_shows_notification() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        assert!(manager.is_visible());
        assert_eq!(
            manager.current().map(Notification::severity),
            Some(Severity::Success)
        );
    }

    #[test]
    fn push_replaces_in_place() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::error("second"));

        let current = manager.current().expect("visible");
        assert_eq!(current.severity(), Severity::Error);
        assert_eq!(current.message_key(), Some("second"));
    }

    #[test]
    fn dismiss_removes_matching_notification() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert!(!manager.is_visible());
    }

    #[test]
    fn dismissing_replaced_toast_keeps_new_one() {
        let mut manager = Manager::new();
        let old = Notification::success("old");
        let old_id = old.id();
        manager.push(old);
        manager.push(Notification::warning("new"));

        assert!(!manager.dismiss(old_id));
        assert!(manager.is_visible());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::error("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.is_visible());
    }

    #[test]
    fn toast_auto_dismisses_after_two_seconds() {
        let mut manager = Manager::new();
        manager.push(Notification::error("test"));
        let shown_at = manager.current().expect("visible").created_at();

        manager.tick_at(shown_at + Duration::from_millis(1999));
        assert!(manager.is_visible());

        manager.tick_at(shown_at + Duration::from_millis(2000));
        assert!(!manager.is_visible());
    }

    #[test]
    fn every_severity_auto_dismisses() {
        for notification in [
            Notification::success("s"),
            Notification::warning("w"),
            Notification::error("e"),
        ] {
            let mut manager = Manager::new();
            let shown_at = notification.created_at();
            manager.push(notification);
            manager.tick_at(shown_at + TOAST_DURATION);
            assert!(!manager.is_visible());
        }
    }

    #[test]
    fn replacement_restarts_timer() {
        let mut manager = Manager::with_duration(Duration::from_millis(2000));
        manager.push(Notification::success("first"));
        let first_at = manager.current().expect("visible").created_at();

        manager.push(Notification::success("second"));
        let second_at = manager.current().expect("visible").created_at();

        manager.tick_at(first_at + Duration::from_millis(2000));
        if second_at > first_at {
            assert!(manager.is_visible(), "second toast should still be showing");
        }
        manager.tick_at(second_at + Duration::from_millis(2000));
        assert!(!manager.is_visible());
    }
}
