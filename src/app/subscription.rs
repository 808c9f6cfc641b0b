// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::easter_egg::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval at which wall-clock time is fed to the page timers.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes key presses that no widget captured.
///
/// Typing into the contact form is captured by the text inputs, so it never
/// reaches the easter egg.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Some(Message::KeyPressed(map_key(&key)))
            }
            _ => None,
        }
    })
}

/// Creates the periodic tick while any page timer is pending.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowUp) => Key::Up,
        keyboard::Key::Named(Named::ArrowDown) => Key::Down,
        keyboard::Key::Named(Named::ArrowLeft) => Key::Left,
        keyboard::Key::Named(Named::ArrowRight) => Key::Right,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Character(c) if c.as_str().eq_ignore_ascii_case("b") => Key::B,
        keyboard::Key::Character(c) if c.as_str().eq_ignore_ascii_case("a") => Key::A,
        _ => Key::Other,
    }
}
