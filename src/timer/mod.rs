// SPDX-License-Identifier: MPL-2.0
//! Timer scheduling capability used by toasts.
//!
//! Toasts never reach for an ambient clock. Every transition that needs to
//! start or stop a timer receives a [`Scheduler`], which lets the host decide
//! how time passes:
//!
//! - [`TimerQueue`] - deterministic queue driven by the host (a periodic tick
//!   in the GUI, explicit `advance_*` calls in tests)
//! - [`AsyncScheduler`] - one tokio sleep task per timer, expiries delivered
//!   on a channel
//!
//! Both deliver expiries as [`Fired`] values that the host feeds back into
//! the toast's update function.

mod async_scheduler;
mod queue;

pub use async_scheduler::AsyncScheduler;
pub use queue::TimerQueue;

use std::fmt;
use std::time::Duration;

/// Opaque identifier of a scheduled timer.
///
/// Handles are unique within the scheduler that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wraps a raw handle value. Only schedulers mint handles.
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A timer that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    /// Handle returned when the timer was scheduled.
    pub handle: TimerHandle,
    /// Scheduler time at which the timer expired.
    pub at: Duration,
    /// Payload given to [`Scheduler::schedule`].
    pub event: E,
}

/// Capability to run an event after a delay, and to take it back.
///
/// Implementations must guarantee that a cancelled timer is never delivered
/// by the scheduler itself. Consumers still have to tolerate an expiry that
/// was already in flight when it was cancelled, which is why [`Fired`]
/// carries the handle.
pub trait Scheduler<E> {
    /// Schedules `event` to fire once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle;

    /// Cancels a timer that has not fired yet.
    ///
    /// Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Time elapsed since the scheduler's origin.
    fn now(&self) -> Duration;
}
