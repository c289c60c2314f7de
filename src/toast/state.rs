// SPDX-License-Identifier: MPL-2.0
//! Timer lifecycle of a single toast.
//!
//! A toast owns two timers. The fade timer hides it, the remove timer detaches
//! it one [`ToastTiming::remove_offset`] later, once the fade-out transition
//! has played. Hovering the toast cancels both; leaving it re-arms them with
//! the shorter hover grace period.
//!
//! ```text
//! mount ──► fade pending ──fade──► hidden ──remove──► detached
//!              ▲   │ enter            │ enter
//!        leave │   ▼                  ▼
//!              └ held (no timers) ◄───┘
//! ```
//!
//! All transitions run on the host's update loop and take the scheduler as an
//! explicit argument. Each one returns an [`Outcome`] telling the host whether
//! the toast needs to be redrawn or dropped.

use super::content::{ToastContent, ToastId};
use super::fade::Fade;
use super::timing::ToastTiming;
use crate::timer::{Fired, Scheduler, TimerHandle};
use std::time::Duration;

/// Which of a toast's two timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Marks the toast as hidden.
    Fade,
    /// Detaches the toast from display.
    Remove,
}

/// Payload scheduled for every toast timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expiry {
    pub toast: ToastId,
    pub kind: TimerKind,
}

impl Expiry {
    #[must_use]
    pub fn fade(toast: ToastId) -> Self {
        Self {
            toast,
            kind: TimerKind::Fade,
        }
    }

    #[must_use]
    pub fn remove(toast: ToastId) -> Self {
        Self {
            toast,
            kind: TimerKind::Remove,
        }
    }
}

/// State of one timer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerSlot {
    /// No timer. Pointer-leave arms an idle slot.
    #[default]
    Idle,
    /// Timer scheduled and not fired yet.
    Pending(TimerHandle),
    /// Timer already fired. Only pointer-enter resets the slot to idle.
    Fired,
}

impl TimerSlot {
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, TimerSlot::Idle)
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, TimerSlot::Pending(_))
    }

    /// Handle of the pending timer.
    #[must_use]
    pub fn handle(self) -> Option<TimerHandle> {
        match self {
            TimerSlot::Pending(handle) => Some(handle),
            TimerSlot::Idle | TimerSlot::Fired => None,
        }
    }
}

/// What the host has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed.
    Unchanged,
    /// Visibility changed, the toast must be re-rendered.
    Redraw,
    /// The toast left the display for good.
    Detached,
}

/// One mounted toast.
#[derive(Debug, Clone)]
pub struct ToastState {
    id: ToastId,
    content: ToastContent,
    timing: ToastTiming,
    visible: bool,
    fade_timer: TimerSlot,
    remove_timer: TimerSlot,
    fade: Fade,
    detached: bool,
}

impl ToastState {
    /// Mounts a new toast with a fresh id.
    ///
    /// The toast starts visible. Its fade timer is scheduled after the
    /// visible delay and its remove timer one remove offset later.
    pub fn mount<S>(content: ToastContent, timing: ToastTiming, scheduler: &mut S) -> Self
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        Self::mount_with_id(ToastId::new(), content, timing, scheduler)
    }

    /// Mounts a new toast with the given id.
    pub fn mount_with_id<S>(
        id: ToastId,
        content: ToastContent,
        timing: ToastTiming,
        scheduler: &mut S,
    ) -> Self
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        let now = scheduler.now();
        let delay = timing.visible.as_duration();
        let fade_timer = scheduler.schedule(delay, Expiry::fade(id));
        let remove_timer =
            scheduler.schedule(delay + ToastTiming::remove_offset(), Expiry::remove(id));

        tracing::debug!(
            toast = %id,
            level = content.level().label(),
            visible_ms = timing.visible.value(),
            "toast mounted"
        );

        Self {
            id,
            content,
            timing,
            visible: true,
            fade_timer: TimerSlot::Pending(fade_timer),
            remove_timer: TimerSlot::Pending(remove_timer),
            fade: Fade::fade_in(now, 0.0),
            detached: false,
        }
    }

    /// Pointer moved onto the toast.
    ///
    /// Cancels both timers, clears both slots and shows the toast again if
    /// it was fading.
    pub fn pointer_entered<S>(&mut self, scheduler: &mut S) -> Outcome
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        if self.detached {
            return Outcome::Unchanged;
        }
        self.clear_timers(scheduler);
        tracing::trace!(toast = %self.id, "pointer entered, timers held");

        if self.visible {
            return Outcome::Unchanged;
        }
        let now = scheduler.now();
        self.fade = Fade::fade_in(now, self.fade.opacity(now));
        self.visible = true;
        Outcome::Redraw
    }

    /// Pointer moved off the toast.
    ///
    /// Arms whichever slot is idle with the hover grace delay. A slot that is
    /// pending or already fired is left alone, so repeated leave events never
    /// push the deadline back.
    pub fn pointer_left<S>(&mut self, scheduler: &mut S) -> Outcome
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        if self.detached {
            return Outcome::Unchanged;
        }
        let grace = self.timing.hover_grace.as_duration();
        if self.fade_timer.is_idle() {
            let handle = scheduler.schedule(grace, Expiry::fade(self.id));
            self.fade_timer = TimerSlot::Pending(handle);
        }
        if self.remove_timer.is_idle() {
            let handle =
                scheduler.schedule(grace + ToastTiming::remove_offset(), Expiry::remove(self.id));
            self.remove_timer = TimerSlot::Pending(handle);
        }
        tracing::trace!(
            toast = %self.id,
            grace_ms = self.timing.hover_grace.value(),
            "pointer left, timers armed"
        );
        Outcome::Unchanged
    }

    /// One of this toast's timers expired.
    ///
    /// Expiries for another toast, or for a handle the slot no longer holds,
    /// are ignored.
    pub fn timer_fired<S>(&mut self, fired: &Fired<Expiry>, scheduler: &mut S) -> Outcome
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        if self.detached || fired.event.toast != self.id {
            return Outcome::Unchanged;
        }
        let slot = match fired.event.kind {
            TimerKind::Fade => &mut self.fade_timer,
            TimerKind::Remove => &mut self.remove_timer,
        };
        if slot.handle() != Some(fired.handle) {
            tracing::trace!(toast = %self.id, handle = %fired.handle, "stale expiry ignored");
            return Outcome::Unchanged;
        }
        *slot = TimerSlot::Fired;

        match fired.event.kind {
            TimerKind::Fade => {
                let now = scheduler.now();
                self.fade = Fade::fade_out(now, self.fade.opacity(now));
                self.visible = false;
                tracing::debug!(toast = %self.id, "toast faded");
                Outcome::Redraw
            }
            TimerKind::Remove => {
                self.clear_timers(scheduler);
                self.detached = true;
                tracing::debug!(toast = %self.id, "toast removed");
                Outcome::Detached
            }
        }
    }

    /// Disposes of the toast before its timers fire.
    pub fn teardown<S>(&mut self, scheduler: &mut S) -> Outcome
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        if self.detached {
            return Outcome::Unchanged;
        }
        self.clear_timers(scheduler);
        self.detached = true;
        tracing::debug!(toast = %self.id, "toast torn down");
        Outcome::Detached
    }

    fn clear_timers<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Expiry> + ?Sized,
    {
        for slot in [&mut self.fade_timer, &mut self.remove_timer] {
            if let Some(handle) = slot.handle() {
                scheduler.cancel(handle);
            }
            *slot = TimerSlot::Idle;
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Whether the toast is shown, as opposed to faded.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the toast left the display. Terminal.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    #[must_use]
    pub fn fade_timer(&self) -> TimerSlot {
        self.fade_timer
    }

    #[must_use]
    pub fn remove_timer(&self) -> TimerSlot {
        self.remove_timer
    }

    /// Rendered opacity at scheduler time `now`.
    #[must_use]
    pub fn opacity(&self, now: Duration) -> f32 {
        if self.detached {
            0.0
        } else {
            self.fade.opacity(now)
        }
    }

    /// Whether an opacity transition is still playing at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.detached && !self.fade.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use crate::timer::TimerQueue;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mount(queue: &mut TimerQueue<Expiry>, visible: u32, grace: u32) -> ToastState {
        ToastState::mount(
            ToastContent::info("saved"),
            ToastTiming::from_millis(visible, grace),
            queue,
        )
    }

    /// Advances the clock to `t`, delivering every due expiry to `toast`.
    fn run_until(
        queue: &mut TimerQueue<Expiry>,
        toast: &mut ToastState,
        t: u64,
    ) -> Vec<(Duration, TimerKind)> {
        queue.advance_to(ms(t));
        let mut fired = Vec::new();
        while let Some(expiry) = queue.pop_due() {
            fired.push((expiry.at, expiry.event.kind));
            toast.timer_fired(&expiry, queue);
        }
        fired
    }

    fn deadline(queue: &TimerQueue<Expiry>, slot: TimerSlot) -> Option<Duration> {
        slot.handle().and_then(|handle| queue.deadline_of(handle))
    }

    #[test]
    fn mount_shows_toast_and_schedules_both_timers() {
        let mut queue = TimerQueue::new();
        let toast = mount(&mut queue, 3000, 1000);

        assert!(toast.is_visible());
        assert!(!toast.is_detached());
        assert_eq!(deadline(&queue, toast.fade_timer()), Some(ms(3000)));
        assert_eq!(deadline(&queue, toast.remove_timer()), Some(ms(4000)));
        assert_eq!(queue.pending_count(), 2);
    }

    #[test]
    fn toast_fades_then_detaches_without_interaction() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        assert!(run_until(&mut queue, &mut toast, 2999).is_empty());
        assert!(toast.is_visible());

        let fired = run_until(&mut queue, &mut toast, 3000);
        assert_eq!(fired, vec![(ms(3000), TimerKind::Fade)]);
        assert!(!toast.is_visible());
        assert!(!toast.is_detached());
        assert_eq!(toast.fade_timer(), TimerSlot::Fired);
        assert!(toast.remove_timer().is_pending());

        assert!(run_until(&mut queue, &mut toast, 3999).is_empty());
        assert!(!toast.is_detached());

        let fired = run_until(&mut queue, &mut toast, 4000);
        assert_eq!(fired, vec![(ms(4000), TimerKind::Remove)]);
        assert!(toast.is_detached());
    }

    #[test]
    fn delays_follow_visible_millis() {
        for visible in [1, 250, 3000, 7000] {
            let mut queue = TimerQueue::new();
            let mut toast = mount(&mut queue, visible, 1000);
            let visible = u64::from(visible);

            let fired = run_until(&mut queue, &mut toast, visible + 1000);
            assert_eq!(
                fired,
                vec![
                    (ms(visible), TimerKind::Fade),
                    (ms(visible + 1000), TimerKind::Remove),
                ]
            );
            assert!(toast.is_detached());
        }
    }

    #[test]
    fn hover_then_leave_reschedules_with_grace_period() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        run_until(&mut queue, &mut toast, 1000);
        assert_eq!(toast.pointer_entered(&mut queue), Outcome::Unchanged);
        assert!(toast.is_visible());
        assert!(toast.fade_timer().is_idle());
        assert!(toast.remove_timer().is_idle());
        assert_eq!(queue.pending_count(), 0);

        run_until(&mut queue, &mut toast, 1500);
        toast.pointer_left(&mut queue);
        assert_eq!(deadline(&queue, toast.fade_timer()), Some(ms(2500)));
        assert_eq!(deadline(&queue, toast.remove_timer()), Some(ms(3500)));

        let fired = run_until(&mut queue, &mut toast, 10_000);
        assert_eq!(
            fired,
            vec![(ms(2500), TimerKind::Fade), (ms(3500), TimerKind::Remove)]
        );
        assert!(toast.is_detached());
    }

    #[test]
    fn hovering_keeps_toast_indefinitely() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        toast.pointer_entered(&mut queue);
        assert!(run_until(&mut queue, &mut toast, 60_000).is_empty());
        assert!(toast.is_visible());
        assert!(!toast.is_detached());
    }

    #[test]
    fn repeated_leave_does_not_reschedule() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        toast.pointer_entered(&mut queue);
        toast.pointer_left(&mut queue);
        let fade = toast.fade_timer();
        let remove = toast.remove_timer();

        run_until(&mut queue, &mut toast, 500);
        toast.pointer_left(&mut queue);
        toast.pointer_left(&mut queue);

        assert_eq!(toast.fade_timer(), fade);
        assert_eq!(toast.remove_timer(), remove);
        assert_eq!(queue.pending_count(), 2);
        assert_eq!(deadline(&queue, fade), Some(ms(1000)));
    }

    #[test]
    fn leave_without_enter_keeps_initial_timers() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);
        let fade = toast.fade_timer();

        run_until(&mut queue, &mut toast, 200);
        toast.pointer_left(&mut queue);

        assert_eq!(toast.fade_timer(), fade);
        assert_eq!(deadline(&queue, fade), Some(ms(3000)));
    }

    #[test]
    fn leave_after_fade_does_not_rearm_fired_slot() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        run_until(&mut queue, &mut toast, 3200);
        toast.pointer_left(&mut queue);

        assert_eq!(toast.fade_timer(), TimerSlot::Fired);
        assert_eq!(queue.pending_count(), 1);
        run_until(&mut queue, &mut toast, 4000);
        assert!(toast.is_detached());
    }

    #[test]
    fn enter_during_fade_out_restores_and_cancels_removal() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        run_until(&mut queue, &mut toast, 3500);
        assert!(!toast.is_visible());

        assert_eq!(toast.pointer_entered(&mut queue), Outcome::Redraw);
        assert!(toast.is_visible());
        assert_eq!(queue.pending_count(), 0);

        assert!(run_until(&mut queue, &mut toast, 20_000).is_empty());
        assert!(!toast.is_detached());

        toast.pointer_left(&mut queue);
        let fired = run_until(&mut queue, &mut toast, 30_000);
        assert_eq!(
            fired,
            vec![
                (ms(21_000), TimerKind::Fade),
                (ms(22_000), TimerKind::Remove)
            ]
        );
    }

    #[test]
    fn teardown_cancels_pending_timers() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        assert_eq!(toast.teardown(&mut queue), Outcome::Detached);
        assert!(toast.is_detached());
        assert_eq!(queue.pending_count(), 0);
        assert!(run_until(&mut queue, &mut toast, 10_000).is_empty());

        assert_eq!(toast.teardown(&mut queue), Outcome::Unchanged);
    }

    #[test]
    fn teardown_after_fade_cancels_remove_timer() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        run_until(&mut queue, &mut toast, 3000);
        toast.teardown(&mut queue);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);
        let old_fade = toast.fade_timer().handle().expect("fade pending");

        toast.pointer_entered(&mut queue);
        toast.pointer_left(&mut queue);

        let stale = Fired {
            handle: old_fade,
            at: ms(3000),
            event: Expiry::fade(toast.id()),
        };
        assert_eq!(toast.timer_fired(&stale, &mut queue), Outcome::Unchanged);
        assert!(toast.is_visible());
        assert!(toast.fade_timer().is_pending());
    }

    #[test]
    fn expiry_for_another_toast_is_ignored() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);
        let other = Fired {
            handle: toast.fade_timer().handle().expect("fade pending"),
            at: ms(3000),
            event: Expiry::fade(ToastId::new()),
        };

        assert_eq!(toast.timer_fired(&other, &mut queue), Outcome::Unchanged);
        assert!(toast.is_visible());
    }

    #[test]
    fn detached_toast_ignores_pointer_events() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);
        run_until(&mut queue, &mut toast, 4000);

        assert_eq!(toast.pointer_entered(&mut queue), Outcome::Unchanged);
        assert_eq!(toast.pointer_left(&mut queue), Outcome::Unchanged);
        assert_eq!(queue.pending_count(), 0);
        assert!(toast.is_detached());
    }

    #[test]
    fn opacity_follows_fade_transitions() {
        let mut queue = TimerQueue::new();
        let mut toast = mount(&mut queue, 3000, 1000);

        assert_abs_diff_eq!(toast.opacity(ms(0)), 0.0, epsilon = F32_EPSILON);
        assert!(toast.is_animating(ms(10)));
        assert_abs_diff_eq!(toast.opacity(ms(50)), 1.0, epsilon = F32_EPSILON);
        assert!(!toast.is_animating(ms(2000)));

        run_until(&mut queue, &mut toast, 3000);
        let halfway = toast.opacity(ms(3500));
        assert!(halfway > 0.0 && halfway < 1.0);
        assert!(toast.is_animating(ms(3500)));
        assert_abs_diff_eq!(toast.opacity(ms(3999)), 0.0, epsilon = 1e-2);

        run_until(&mut queue, &mut toast, 4000);
        assert_abs_diff_eq!(toast.opacity(ms(4000)), 0.0, epsilon = F32_EPSILON);
    }
}
