// SPDX-License-Identifier: MPL-2.0
//! Auto-dismissing toast notifications.
//!
//! A toast appears, fades after a delay and is detached one second later,
//! once the fade-out has played. While the pointer hovers a toast both of its
//! timers are held; when the pointer leaves they restart with a shorter grace
//! period.
//!
//! # Components
//!
//! - [`state`] - `ToastState`, the timer lifecycle of one toast
//! - [`stack`] - `ToastStack`, the shared container routing messages
//! - [`view`] - iced rendering and pointer wiring
//! - [`timing`], [`fade`], [`placement`] - supporting value types
//!
//! # Usage
//!
//! ```
//! use iced_toast::timer::TimerQueue;
//! use iced_toast::toast::{Message, ToastContent, ToastStack, ToastTiming};
//! use std::time::Duration;
//!
//! let mut queue = TimerQueue::new();
//! let mut toasts = ToastStack::new(ToastTiming::default());
//! toasts.push(ToastContent::success("Settings saved"), &mut queue);
//!
//! // The host advances time and feeds expiries back.
//! queue.advance_by(Duration::from_secs(5));
//! while let Some(fired) = queue.pop_due() {
//!     toasts.update(Message::Expired(fired), &mut queue);
//! }
//! assert!(toasts.is_empty());
//! ```

mod content;
pub mod fade;
pub mod placement;
pub mod stack;
pub mod state;
pub mod timing;
pub mod view;

pub use content::{Level, ToastContent, ToastId};
pub use placement::{Horizontal, Placement, Vertical};
pub use stack::{Message, ToastStack};
pub use state::{Expiry, Outcome, TimerKind, TimerSlot, ToastState};
pub use timing::{HoverGraceMillis, ToastTiming, VisibleMillis};
