// SPDX-License-Identifier: MPL-2.0
//! Timer service abstraction.
//!
//! Widgets express "later" by scheduling an event with a [`TimerService`].
//! When the deadline passes the host receives the event back and routes it to
//! the widget that scheduled it, the same way the GUI toolkit delivers
//! messages to `update`. Every scheduled timer yields a [`TimerToken`] the
//! widget keeps so it can cancel deterministically.

mod scheduler;

pub use scheduler::Scheduler;

use std::time::Duration;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Schedules events for later delivery on the host's single logical thread.
pub trait TimerService<E> {
    /// Delivers `event` once, `delay` from now.
    fn after(&mut self, delay: Duration, event: E) -> TimerToken;

    /// Delivers `event` every `interval` until cancelled.
    fn every(&mut self, interval: Duration, event: E) -> TimerToken;

    /// Cancels a pending timer. Returns `false` if it already fired (one-shot)
    /// or was never scheduled.
    fn cancel(&mut self, token: TimerToken) -> bool;
}
