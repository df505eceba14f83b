// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Input problem or degraded state (orange).
    Warning,
    /// Failed operation (red).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Leading glyph of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✕",
        }
    }
}

/// What the toast displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationText {
    /// An i18n key resolved at render time.
    Key(String),
    /// Text shown verbatim, e.g. an error message sent by the server.
    Plain(String),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: NotificationText,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::with_text(severity, NotificationText::Key(message_key.into()))
    }

    /// Creates a notification that shows `text` as-is.
    pub fn plain(severity: Severity, text: impl Into<String>) -> Self {
        Self::with_text(severity, NotificationText::Plain(text.into()))
    }

    fn with_text(severity: Severity, text: NotificationText) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text,
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &NotificationText {
        &self.text
    }

    /// Returns the i18n key, or `None` for plain text.
    #[must_use]
    pub fn message_key(&self) -> Option<&str> {
        match &self.text {
            NotificationText::Key(key) => Some(key),
            NotificationText::Plain(_) => None,
        }
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether `duration` has elapsed since creation, as seen at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= duration
    }

    /// Resolves the displayed message.
    pub fn message(&self, i18n: &I18n) -> String {
        match &self.text {
            NotificationText::Plain(text) => text.clone(),
            NotificationText::Key(key) => i18n.tr(key),
        }
    }
}
