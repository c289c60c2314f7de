// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides auto-dismissing toast notifications for Iced
//! applications.
//!
//! A toast fades after a configurable delay and is detached once its fade-out
//! has played. Hovering a toast holds it on screen; leaving it restarts a
//! shorter grace period. Timers go through an explicit [`timer::Scheduler`],
//! so the whole lifecycle runs against a fake clock in tests.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod timer;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;
