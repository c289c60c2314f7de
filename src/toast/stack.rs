// SPDX-License-Identifier: MPL-2.0
//! Shared toast container.
//!
//! The stack holds every toast currently on screen, newest first, and routes
//! pointer and timer messages to the toast they name. Toasts are independent:
//! hovering one never affects the timers of another.

use super::content::{ToastContent, ToastId};
use super::state::{Expiry, Outcome, ToastState};
use super::timing::ToastTiming;
use crate::timer::{Fired, Scheduler};
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved onto a toast.
    PointerEntered(ToastId),
    /// Pointer moved off a toast.
    PointerLeft(ToastId),
    /// Close button pressed.
    Dismiss(ToastId),
    /// A toast timer expired.
    Expired(Fired<Expiry>),
}

impl Message {
    /// Toast the message is addressed to.
    #[must_use]
    pub fn toast(&self) -> ToastId {
        match self {
            Message::PointerEntered(id) | Message::PointerLeft(id) | Message::Dismiss(id) => *id,
            Message::Expired(fired) => fired.event.toast,
        }
    }
}

/// Toasts currently on screen.
#[derive(Debug, Default)]
pub struct ToastStack {
    /// Mounted toasts, newest first.
    toasts: VecDeque<ToastState>,
    /// Timing given to newly pushed toasts.
    timing: ToastTiming,
}

impl ToastStack {
    #[must_use]
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            toasts: VecDeque::new(),
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Changes the timing of toasts pushed from now on.
    pub fn set_timing(&mut self, timing: ToastTiming) {
        self.timing = timing;
    }

    /// Mounts a toast at the front of the stack.
    pub fn push<S>(&mut self, content: ToastContent, scheduler: &mut S) -> ToastId
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        let toast = ToastState::mount(content, self.timing, scheduler);
        let id = toast.id();
        self.toasts.push_front(toast);
        id
    }

    /// Routes a message to its toast.
    ///
    /// Messages for toasts that are no longer on screen are ignored. A toast
    /// whose transition ends in [`Outcome::Detached`] is dropped.
    pub fn update<S>(&mut self, message: Message, scheduler: &mut S) -> Outcome
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        let id = message.toast();
        let Some(index) = self.position(id) else {
            tracing::trace!(toast = %id, "message for unknown toast ignored");
            return Outcome::Unchanged;
        };

        let toast = &mut self.toasts[index];
        let outcome = match message {
            Message::PointerEntered(_) => toast.pointer_entered(scheduler),
            Message::PointerLeft(_) => toast.pointer_left(scheduler),
            Message::Dismiss(_) => toast.teardown(scheduler),
            Message::Expired(fired) => toast.timer_fired(&fired, scheduler),
        };

        if outcome == Outcome::Detached {
            self.toasts.remove(index);
        }
        outcome
    }

    /// Tears down and drops a toast.
    ///
    /// Returns `true` if the toast was on screen.
    pub fn dismiss<S>(&mut self, id: ToastId, scheduler: &mut S) -> bool
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        self.update(Message::Dismiss(id), scheduler) == Outcome::Detached
    }

    /// Tears down every toast.
    pub fn clear<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        for mut toast in self.toasts.drain(..) {
            toast.teardown(scheduler);
        }
    }

    /// Returns the toasts on screen, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastState> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastState> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether any toast is mid-transition at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.toasts.iter().any(|toast| toast.is_animating(now))
    }

    fn position(&self, id: ToastId) -> Option<usize> {
        self.toasts.iter().position(|toast| toast.id() == id)
    }
}
