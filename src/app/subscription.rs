// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::{FRAME_TICK_INTERVAL_MILLIS, TIMER_TICK_INTERVAL_MILLIS};
use iced::{time, Subscription};
use std::time::Duration;

/// How often the clock ticks while toasts are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickRate {
    /// A fade is playing; tick every frame.
    Frame,
    /// Only timers are waiting.
    Timer,
}

impl TickRate {
    fn interval(self) -> Duration {
        match self {
            TickRate::Frame => Duration::from_millis(FRAME_TICK_INTERVAL_MILLIS),
            TickRate::Timer => Duration::from_millis(TIMER_TICK_INTERVAL_MILLIS),
        }
    }
}

/// Ticks while toasts are on screen so their timers fire and fades animate.
///
/// With no toast there is nothing to expire, so the subscription is dropped
/// and the application stays idle.
pub fn create_tick_subscription(rate: Option<TickRate>) -> Subscription<Message> {
    match rate {
        Some(rate) => time::every(rate.interval()).map(Message::Tick),
        None => Subscription::none(),
    }
}
