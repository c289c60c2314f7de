// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast timing**: Display delay and hover grace period
//! - **Fade**: Opacity transition lengths
//! - **Host**: Tick interval used by the GUI to drive timers

// ==========================================================================
// Toast Timing Defaults
// ==========================================================================

/// Default delay before a freshly shown toast starts fading (in milliseconds).
pub const DEFAULT_VISIBLE_MILLIS: u32 = 3000;

/// Default delay before fading once the pointer has left the toast (in milliseconds).
pub const DEFAULT_HOVER_GRACE_MILLIS: u32 = 1000;

/// Minimum accepted toast delay (in milliseconds).
pub const MIN_TOAST_DELAY_MILLIS: u32 = 1;

/// Maximum accepted toast delay (10 minutes, in milliseconds).
pub const MAX_TOAST_DELAY_MILLIS: u32 = 600_000;

/// Gap between the fade timer and the remove timer (in milliseconds).
///
/// Equal to [`FADE_OUT_MILLIS`]: the element is detached once it has faded out.
pub const REMOVE_DELAY_OFFSET_MILLIS: u32 = FADE_OUT_MILLIS;

// ==========================================================================
// Fade Defaults
// ==========================================================================

/// Length of the fade-in transition when a toast appears (in milliseconds).
pub const FADE_IN_MILLIS: u32 = 50;

/// Length of the fade-out transition once the fade timer fires (in milliseconds).
pub const FADE_OUT_MILLIS: u32 = 1000;

// ==========================================================================
// Host Defaults
// ==========================================================================

/// Tick interval while a toast fade is playing (in milliseconds). Short
/// enough for a smooth fade.
pub const FRAME_TICK_INTERVAL_MILLIS: u64 = 16;

/// Tick interval driving the timer queue while toasts are on screen but
/// none is animating (in milliseconds).
pub const TIMER_TICK_INTERVAL_MILLIS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DELAY_MILLIS > 0);
    assert!(MIN_TOAST_DELAY_MILLIS <= DEFAULT_HOVER_GRACE_MILLIS);
    assert!(DEFAULT_HOVER_GRACE_MILLIS <= DEFAULT_VISIBLE_MILLIS);
    assert!(DEFAULT_VISIBLE_MILLIS <= MAX_TOAST_DELAY_MILLIS);
    assert!(FADE_IN_MILLIS < FADE_OUT_MILLIS);
    assert!(FRAME_TICK_INTERVAL_MILLIS < TIMER_TICK_INTERVAL_MILLIS);
};
