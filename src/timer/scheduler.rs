// SPDX-License-Identifier: MPL-2.0
//! Deterministic virtual-time scheduler.
//!
//! The scheduler never reads the wall clock. The host advances it with the
//! elapsed time it observes (the desktop app uses a periodic tick, tests use
//! exact durations), which keeps timing behavior reproducible.

use super::{TimerService, TimerToken};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

/// Shortest repeat interval accepted by [`Scheduler::every`].
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct Entry<E> {
    event: E,
    repeat: Option<Duration>,
}

/// A single-threaded timer queue driven by virtual time.
///
/// Deadlines are ordered by time, then by scheduling order, so two timers due
/// at the same instant fire in the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_seq: u64,
    /// (deadline, sequence, token) min-heap. Cancelled entries stay in the
    /// heap and are skipped when popped.
    queue: BinaryHeap<Reverse<(Duration, u64, TimerToken)>>,
    entries: HashMap<TimerToken, Entry<E>>,
    next_token: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
            entries: HashMap::new(),
            next_token: 0,
        }
    }
}

impl<E: Clone> Scheduler<E> {
    /// Creates a scheduler whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.contains_key(&token)
    }

    /// Fires the earliest live timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline, so anything scheduled while
    /// handling the returned event is measured from the moment it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        loop {
            let Reverse((deadline, _, token)) = *self.queue.peek()?;
            if deadline > until {
                return None;
            }
            self.queue.pop();

            let Some(entry) = self.entries.get(&token) else {
                // cancelled
                continue;
            };

            self.now = self.now.max(deadline);
            let event = entry.event.clone();
            let repeat = entry.repeat;
            match repeat {
                Some(interval) => self.push(deadline + interval, token),
                None => {
                    self.entries.remove(&token);
                }
            }
            return Some(event);
        }
    }

    /// Moves the clock to `until` once nothing else is due before it.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Fires everything due within `elapsed` from now, without a handler.
    ///
    /// Events scheduled by whoever consumes the result are not considered;
    /// hosts that react to events should loop over [`Scheduler::pop_due`].
    pub fn advance(&mut self, elapsed: Duration) -> Vec<E> {
        let until = self.now + elapsed;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(until) {
            fired.push(event);
        }
        self.settle(until);
        fired
    }

    fn insert(&mut self, delay: Duration, event: E, repeat: Option<Duration>) -> TimerToken {
        let token = TimerToken::from_raw(self.next_token);
        self.next_token += 1;
        self.entries.insert(token, Entry { event, repeat });
        self.push(self.now + delay, token);
        token
    }

    fn push(&mut self, deadline: Duration, token: TimerToken) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((deadline, seq, token)));
    }
}

impl<E: Clone> TimerService<E> for Scheduler<E> {
    fn after(&mut self, delay: Duration, event: E) -> TimerToken {
        self.insert(delay, event, None)
    }

    fn every(&mut self, interval: Duration, event: E) -> TimerToken {
        let interval = interval.max(MIN_INTERVAL);
        self.insert(interval, event, Some(interval))
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        self.entries.remove(&token).is_some()
    }
}
