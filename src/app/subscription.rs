// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::dashboard;
use super::Message;
use crate::config::TOAST_TICK_INTERVAL;
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Event, Subscription};

/// Periodic tick driving toast auto-dismiss; idle while no toast is shown.
pub fn create_tick_subscription(toast_visible: bool) -> Subscription<Message> {
    if toast_visible {
        time::every(TOAST_TICK_INTERVAL).map(|_| {
            Message::Dashboard(dashboard::Message::Notification(NotificationMessage::Tick))
        })
    } else {
        Subscription::none()
    }
}

/// Escape closes the image dialog; only listened to while it is open.
pub fn create_keyboard_subscription(dialog_open: bool) -> Subscription<Message> {
    if dialog_open {
        event::listen_with(|event, status, _window_id| match (event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::Dashboard(dashboard::Message::EscapePressed)),
            _ => None,
        })
    } else {
        Subscription::none()
    }
}
