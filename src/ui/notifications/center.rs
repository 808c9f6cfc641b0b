// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` owns at most one notification. Showing a new one
//! deletes the previous toast outright (no exit animation) and starts the
//! choreography again:
//!
//! ```text
//! show ─► rendered off-screen ─(enter delay)─► slide in ─► visible
//!                                                  │
//!        close button / display time elapsed ──────┘
//!                                                  ▼
//!                          slide out ─(transition)─► removed
//! ```

use super::notification::{Kind, Notification, NotificationId, Phase};
use crate::config::{
    Config, DEFAULT_DISPLAY_MS, DEFAULT_ENTER_DELAY_MS, DEFAULT_TRANSITION_MS, MAX_DISPLAY_MS,
    MAX_ENTER_DELAY_MS, MAX_TRANSITION_MS, MIN_DISPLAY_MS, MIN_ENTER_DELAY_MS, MIN_TRANSITION_MS,
    TOAST_SLIDE_PX,
};
use crate::surface::{ElementId, ElementSpec, Offset, Style, Surface};
use crate::timer::TimerService;
use std::time::Duration;

/// Class shared by every toast element.
pub const NOTIFICATION_CLASS: &str = "notification";

/// Class of the toast's close affordance.
pub const CLOSE_CLASS: &str = "notification-close";

/// Messages for notification state changes.
///
/// Timer-driven messages carry the id of the notification that scheduled
/// them, so a late timer never acts on a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Entrance delay elapsed: slide in.
    Enter(NotificationId),
    /// Display time elapsed.
    Expire(NotificationId),
    /// Close button pressed.
    Close(NotificationId),
    /// Exit transition finished: remove from the surface.
    Remove(NotificationId),
}

/// Toast timings, clamped to sane bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    enter_delay: Duration,
    transition: Duration,
    display: Duration,
}

impl NotificationTiming {
    /// Creates timings from milliseconds, clamping each to its valid range.
    #[must_use]
    pub fn new(enter_delay_ms: u64, transition_ms: u64, display_ms: u64) -> Self {
        Self {
            enter_delay: Duration::from_millis(
                enter_delay_ms.clamp(MIN_ENTER_DELAY_MS, MAX_ENTER_DELAY_MS),
            ),
            transition: Duration::from_millis(
                transition_ms.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS),
            ),
            display: Duration::from_millis(display_ms.clamp(MIN_DISPLAY_MS, MAX_DISPLAY_MS)),
        }
    }

    /// Reads the `[notifications]` section.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let section = &config.notifications;
        Self::new(
            section.enter_delay_ms.unwrap_or(DEFAULT_ENTER_DELAY_MS),
            section.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            section.display_ms.unwrap_or(DEFAULT_DISPLAY_MS),
        )
    }

    #[must_use]
    pub fn enter_delay(self) -> Duration {
        self.enter_delay
    }

    #[must_use]
    pub fn transition(self) -> Duration {
        self.transition
    }

    #[must_use]
    pub fn display(self) -> Duration {
        self.display
    }
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self::new(
            DEFAULT_ENTER_DELAY_MS,
            DEFAULT_TRANSITION_MS,
            DEFAULT_DISPLAY_MS,
        )
    }
}

/// Surfaces one transient message at a time.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    timing: NotificationTiming,
    active: Option<Notification>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            timing,
            active: None,
        }
    }

    #[must_use]
    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// The notification currently on the surface, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref()
    }

    /// Shows a message, replacing whatever is currently displayed.
    ///
    /// The previous toast is deleted immediately and its timers cancelled.
    /// The new toast is rendered off-screen; it slides in after the entrance
    /// delay and dismisses itself once the display time has elapsed.
    pub fn show<E, S, T>(
        &mut self,
        surface: &mut S,
        timers: &mut T,
        message: impl Into<String>,
        kind: Kind,
    ) -> NotificationId
    where
        E: From<Message>,
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        self.discard::<E, S, T>(surface, timers);
        for stray in surface.query(NOTIFICATION_CLASS) {
            surface.remove(stray);
        }

        let id = NotificationId::new();
        let message = message.into();

        let element = surface.create(
            None,
            ElementSpec::new("div")
                .class(NOTIFICATION_CLASS)
                .class(kind.class_name())
                .text(message.clone()),
        );
        surface.set_style(element, Style::Background(kind.fill()));
        surface.set_style(element, Style::TranslateX(Offset::Px(TOAST_SLIDE_PX)));
        surface.set_style(element, Style::Transition(self.timing.transition));

        let close_button = surface.create(
            Some(element),
            ElementSpec::new("button")
                .class(CLOSE_CLASS)
                .text("×")
                .label("Close notification"),
        );

        let enter_timer = timers.after(self.timing.enter_delay, Message::Enter(id).into());
        let expire_timer = timers.after(self.timing.display, Message::Expire(id).into());

        tracing::debug!(?id, kind = kind.name(), "notification shown");

        self.active = Some(Notification {
            id,
            kind,
            message,
            phase: Phase::Entering,
            element,
            close_button,
            enter_timer: Some(enter_timer),
            expire_timer: Some(expire_timer),
            remove_timer: None,
        });
        id
    }

    /// Starts the exit transition of notification `id`.
    ///
    /// Cancels its pending entrance and auto-dismiss timers. Returns `false`
    /// (and does nothing) if `id` is not the active notification or is
    /// already leaving, so repeated dismissals are harmless.
    pub fn dismiss<E, S, T>(&mut self, surface: &mut S, timers: &mut T, id: NotificationId) -> bool
    where
        E: From<Message>,
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        let transition = self.timing.transition;
        let Some(notification) = self.active.as_mut().filter(|n| n.id == id) else {
            return false;
        };
        if notification.phase == Phase::Leaving {
            return false;
        }

        if let Some(token) = notification.enter_timer.take() {
            timers.cancel(token);
        }
        if let Some(token) = notification.expire_timer.take() {
            timers.cancel(token);
        }

        surface.set_style(
            notification.element,
            Style::TranslateX(Offset::Px(TOAST_SLIDE_PX)),
        );
        notification.phase = Phase::Leaving;
        notification.remove_timer = Some(timers.after(transition, Message::Remove(id).into()));

        tracing::debug!(?id, "notification dismissed");
        true
    }

    /// Handles a notification message.
    pub fn update<E, S, T>(&mut self, surface: &mut S, timers: &mut T, message: Message)
    where
        E: From<Message>,
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        match message {
            Message::Enter(id) => {
                if let Some(notification) = self
                    .active
                    .as_mut()
                    .filter(|n| n.id == id && n.phase == Phase::Entering)
                {
                    surface.set_style(notification.element, Style::TranslateX(Offset::Px(0.0)));
                    notification.enter_timer = None;
                    notification.phase = Phase::Visible;
                }
            }
            Message::Expire(id) | Message::Close(id) => {
                self.dismiss::<E, S, T>(surface, timers, id);
            }
            Message::Remove(id) => {
                let leaving = self
                    .active
                    .as_ref()
                    .is_some_and(|n| n.id == id && n.phase == Phase::Leaving);
                if let Some(notification) = self.active.take_if(|_| leaving) {
                    surface.remove(notification.element);
                    tracing::debug!(?id, "notification removed");
                }
            }
        }
    }

    /// Single delegated click handler: maps a clicked element to a message.
    #[must_use]
    pub fn handle_click(&self, element: ElementId) -> Option<Message> {
        self.active
            .as_ref()
            .filter(|n| n.close_button == element)
            .map(|n| Message::Close(n.id))
    }

    /// Removes the active notification and cancels everything it scheduled.
    pub fn teardown<E, S, T>(&mut self, surface: &mut S, timers: &mut T)
    where
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        self.discard::<E, S, T>(surface, timers);
    }

    fn discard<E, S, T>(&mut self, surface: &mut S, timers: &mut T)
    where
        S: Surface + ?Sized,
        T: TimerService<E> + ?Sized,
    {
        if let Some(mut previous) = self.active.take() {
            for token in previous.take_timers() {
                timers.cancel(token);
            }
            surface.remove(previous.element);
        }
    }
}
