// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timer scheduling for the reveal sequence.
//!
//! The sequencer never sleeps. It arms timers on a [`Scheduler`] and is
//! handed back the events whose deadlines have passed when time advances.

use indexmap::IndexMap;
use std::time::Duration;

/// Handle for an armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Source of delayed events.
///
/// Time only moves forward through [`Scheduler::poll_due`] and
/// [`Scheduler::settle`], so callers decide how fast it runs.
pub trait Scheduler<E> {
    /// Current time since the scheduler was created
    fn now(&self) -> Duration;

    /// Arm a timer delivering `event` once `delay` has passed
    fn after(&mut self, delay: Duration, event: E) -> TimerId;

    /// Cancel an armed timer. Returns false if it already fired or was cancelled.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Cancel every armed timer
    fn cancel_all(&mut self);

    /// Number of armed timers
    fn pending(&self) -> usize;

    /// Remove and return the earliest event due at or before `until`.
    ///
    /// The clock moves to that event's deadline, so timers armed while
    /// handling it are measured from when it fired.
    fn poll_due(&mut self, until: Duration) -> Option<E>;

    /// Move the clock to `until` once nothing more is due
    fn settle(&mut self, until: Duration);
}

#[derive(Debug, Clone)]
struct PendingTimer<E> {
    deadline: Duration,
    event: E,
}

/// Virtual-time scheduler advanced explicitly by its owner.
///
/// Timers sharing a deadline fire in the order they were armed.
#[derive(Debug, Clone)]
pub struct ManualClock<E> {
    now: Duration,
    next_id: u64,
    timers: IndexMap<TimerId, PendingTimer<E>>,
}

impl<E> ManualClock<E> {
    /// Create a clock at time zero with nothing armed
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: IndexMap::new(),
        }
    }

    /// Deadline of the next timer to fire, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|t| t.deadline).min()
    }

    /// Whether a timer is still armed
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }
}

impl<E> Default for ManualClock<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> for ManualClock<E> {
    fn now(&self) -> Duration {
        self.now
    }

    fn after(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(
            id,
            PendingTimer {
                deadline: self.now + delay,
                event,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.shift_remove(&id).is_some()
    }

    fn cancel_all(&mut self) {
        self.timers.clear();
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }

    fn poll_due(&mut self, until: Duration) -> Option<E> {
        let id = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(id, timer)| (timer.deadline, **id))
            .map(|(id, _)| *id)?;

        let timer = self.timers.shift_remove(&id)?;
        self.now = self.now.max(timer.deadline);
        Some(timer.event)
    }

    fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
