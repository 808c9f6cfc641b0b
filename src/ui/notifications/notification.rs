// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::surface::{ElementId, Fill};
use crate::timer::TimerToken;

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

/// Kind determines the toast's styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    /// Parses a kind name. Unrecognized names fall back to [`Kind::Info`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            _ => Kind::Info,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Error => "error",
        }
    }

    /// Class carried by the toast element (`notification-<kind>`).
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Kind::Info => "notification-info",
            Kind::Success => "notification-success",
            Kind::Error => "notification-error",
        }
    }

    /// Background fill of the toast.
    #[must_use]
    pub fn fill(self) -> Fill {
        match self {
            Kind::Info => Fill::Info,
            Kind::Success => Fill::Success,
            Kind::Error => Fill::Error,
        }
    }
}

/// Where a notification is in its on-screen choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rendered off-screen, waiting for the entrance delay.
    Entering,
    /// Slid in and readable.
    Visible,
    /// Sliding out; removed once the transition completes.
    Leaving,
}

/// The single notification owned by a `NotificationCenter`.
#[derive(Debug, Clone)]
pub struct Notification {
    pub(super) id: NotificationId,
    pub(super) kind: Kind,
    pub(super) message: String,
    pub(super) phase: Phase,
    pub(super) element: ElementId,
    pub(super) close_button: ElementId,
    pub(super) enter_timer: Option<TimerToken>,
    pub(super) expire_timer: Option<TimerToken>,
    pub(super) remove_timer: Option<TimerToken>,
}

impl Notification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Animation flag: true once the toast has slid on-screen and until it
    /// starts leaving.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// The toast's element on the render surface.
    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn close_button(&self) -> ElementId {
        self.close_button
    }

    /// All timers this notification still owns.
    pub(super) fn take_timers(&mut self) -> impl Iterator<Item = TimerToken> {
        [
            self.enter_timer.take(),
            self.expire_timer.take(),
            self.remove_timer.take(),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn kind_names_parse_back() {
        for kind in [Kind::Info, Kind::Success, Kind::Error] {
            assert_eq!(Kind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn unknown_kind_falls_back_to_info() {
        assert_eq!(Kind::from_name("warning"), Kind::Info);
        assert_eq!(Kind::from_name(""), Kind::Info);
        assert_eq!(Kind::from_name(" SUCCESS "), Kind::Success);
    }

    #[test]
    fn kinds_have_distinct_fills() {
        assert_ne!(Kind::Info.fill(), Kind::Success.fill());
        assert_ne!(Kind::Info.fill(), Kind::Error.fill());
        assert_ne!(Kind::Success.fill(), Kind::Error.fill());
    }

    #[test]
    fn class_name_embeds_kind() {
        assert_eq!(Kind::Success.class_name(), "notification-success");
        assert_eq!(Kind::default().class_name(), "notification-info");
    }
}
