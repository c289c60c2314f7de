// SPDX-License-Identifier: MPL-2.0
//! Deterministic timer queue driven by the host.
//!
//! Time only moves when the host says so. The GUI advances the queue to the
//! wall-clock elapsed time on every tick; tests advance it by exact amounts,
//! which makes the queue the fake clock of the test suite.

use super::{Fired, Scheduler, TimerHandle};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

/// Timers ordered by deadline, then by scheduling order.
pub struct TimerQueue<E> {
    /// Current scheduler time.
    now: Duration,
    /// Time the host has advanced to.
    horizon: Duration,
    /// Set by [`pop_due`](Self::pop_due) while it yields expiries, cleared
    /// once nothing is due. Outside a drain `now` equals `horizon`.
    draining: bool,
    next_handle: u64,
    pending: BTreeMap<(Duration, TimerHandle), E>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl<E> TimerQueue<E> {
    /// Creates an empty queue whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            horizon: Duration::ZERO,
            draining: false,
            next_handle: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Moves the host clock forward to `target`.
    ///
    /// Timers due at or before `target` are then returned by [`pop_due`](Self::pop_due).
    /// Anything scheduled before the next drain is measured from `target`.
    /// Moving backwards is ignored.
    pub fn advance_to(&mut self, target: Duration) {
        if target <= self.horizon {
            return;
        }
        self.horizon = target;
        if !self.draining {
            self.now = target;
        }
    }

    /// Moves the host clock forward by `delta`.
    pub fn advance_by(&mut self, delta: Duration) {
        self.advance_to(self.horizon + delta);
    }

    /// Pops the earliest timer due at or before the host clock.
    ///
    /// The scheduler time jumps to that timer's deadline, so anything the
    /// consumer schedules while handling the expiry is measured from the
    /// moment it fired. Once nothing is due, time settles on the host clock.
    pub fn pop_due(&mut self) -> Option<Fired<E>> {
        if !self.has_due() {
            self.draining = false;
            self.now = self.horizon;
            return None;
        }
        let ((at, handle), event) = self.pending.pop_first()?;
        self.deadlines.remove(&handle);
        self.draining = true;
        self.now = at;
        Some(Fired { handle, at, event })
    }

    /// Deadline of the next pending timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn deadline_of(&self, handle: TimerHandle) -> Option<Duration> {
        self.deadlines.get(&handle).copied()
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn has_due(&self) -> bool {
        self.next_deadline()
            .is_some_and(|deadline| deadline <= self.horizon)
    }
}

impl<E> Scheduler<E> for TimerQueue<E> {
    fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        let deadline = self.now + delay;
        self.pending.insert((deadline, handle), event);
        self.deadlines.insert(handle, deadline);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(deadline) = self.deadlines.remove(&handle) {
            self.pending.remove(&(deadline, handle));
        }
    }

    fn now(&self) -> Duration {
        self.now
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for TimerQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("horizon", &self.horizon)
            .field("draining", &self.draining)
            .field("pending", &self.pending.len())
            .finish()
    }
}
