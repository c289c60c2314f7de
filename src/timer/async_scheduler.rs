// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed scheduler.
//!
//! Each timer is a spawned task sleeping for the requested delay. Expiries are
//! sent on an unbounded channel so they can be consumed by a single-threaded
//! update loop. Must be used from within a tokio runtime.

use super::{Fired, Scheduler, TimerHandle};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Scheduler running one tokio sleep task per timer.
#[derive(Debug)]
pub struct AsyncScheduler<E> {
    origin: Instant,
    next_handle: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    sender: mpsc::UnboundedSender<Fired<E>>,
}

impl<E: Send + 'static> AsyncScheduler<E> {
    /// Creates a scheduler and the receiver its expiries are delivered on.
    ///
    /// The scheduler clock starts now.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Fired<E>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            origin: Instant::now(),
            next_handle: 0,
            tasks: HashMap::new(),
            sender,
        };
        (scheduler, receiver)
    }

    /// Number of timer tasks that have not completed yet.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks
            .values()
            .filter(|task| !task.is_finished())
            .count()
    }
}

impl<E: Send + 'static> Scheduler<E> for AsyncScheduler<E> {
    fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.tasks.retain(|_, task| !task.is_finished());

        let handle = TimerHandle::from_raw(self.next_handle);
        self.next_handle += 1;

        let sender = self.sender.clone();
        let origin = self.origin;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let fired = Fired {
                handle,
                at: origin.elapsed(),
                event,
            };
            if sender.send(fired).is_err() {
                tracing::trace!(%handle, "expiry dropped, receiver closed");
            }
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl<E> Drop for AsyncScheduler<E> {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[tokio::test(start_paused = true)]
    async fn expiries_arrive_in_deadline_order() {
        let (mut scheduler, mut expiries) = AsyncScheduler::new();
        scheduler.schedule(ms(300), "late");
        scheduler.schedule(ms(100), "early");

        let first = expiries.recv().await.expect("channel open");
        assert_eq!(first.event, "early");
        assert!(first.at >= ms(100));

        let second = expiries.recv().await.expect("channel open");
        assert_eq!(second.event, "late");
        assert!(second.at >= ms(300));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_is_not_delivered() {
        let (mut scheduler, mut expiries) = AsyncScheduler::new();
        let cancelled = scheduler.schedule(ms(100), "cancelled");
        scheduler.schedule(ms(200), "kept");
        scheduler.cancel(cancelled);

        let fired = expiries.recv().await.expect("channel open");
        assert_eq!(fired.event, "kept");
        assert!(expiries.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn now_follows_tokio_clock() {
        let (scheduler, _expiries) = AsyncScheduler::<()>::new();
        tokio::time::advance(ms(250)).await;
        assert!(scheduler.now() >= ms(250));
    }

    #[tokio::test(start_paused = true)]
    async fn finished_tasks_are_not_counted() {
        let (mut scheduler, mut expiries) = AsyncScheduler::new();
        scheduler.schedule(ms(10), ());
        assert_eq!(scheduler.active_count(), 1);

        expiries.recv().await.expect("channel open");
        tokio::task::yield_now().await;
        assert_eq!(scheduler.active_count(), 0);
    }
}
