// SPDX-License-Identifier: MPL-2.0
//! Toast delay domain types.
//!
//! Both delays are stored in milliseconds and clamped to
//! [`MIN_TOAST_DELAY_MILLIS`]..=[`MAX_TOAST_DELAY_MILLIS`], so a toast is never
//! handed a zero or absurd delay by configuration.

use crate::config::{
    DEFAULT_HOVER_GRACE_MILLIS, DEFAULT_VISIBLE_MILLIS, MAX_TOAST_DELAY_MILLIS,
    MIN_TOAST_DELAY_MILLIS, REMOVE_DELAY_OFFSET_MILLIS,
};
use std::time::Duration;

/// Delay between showing a toast and starting its fade.
///
/// # Example
///
/// ```
/// use iced_toast::toast::VisibleMillis;
///
/// let visible = VisibleMillis::new(3000);
/// assert_eq!(visible.value(), 3000);
///
/// // Zero is clamped to the minimum
/// assert_eq!(VisibleMillis::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisibleMillis(u32);

impl VisibleMillis {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_TOAST_DELAY_MILLIS, MAX_TOAST_DELAY_MILLIS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for VisibleMillis {
    fn default() -> Self {
        Self(DEFAULT_VISIBLE_MILLIS)
    }
}

/// Shortened delay applied after the pointer leaves a hovered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoverGraceMillis(u32);

impl HoverGraceMillis {
    /// Creates a new grace period, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_TOAST_DELAY_MILLIS, MAX_TOAST_DELAY_MILLIS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the grace period as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for HoverGraceMillis {
    fn default() -> Self {
        Self(DEFAULT_HOVER_GRACE_MILLIS)
    }
}

/// The pair of delays a toast is mounted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastTiming {
    pub visible: VisibleMillis,
    pub hover_grace: HoverGraceMillis,
}

impl ToastTiming {
    #[must_use]
    pub fn new(visible: VisibleMillis, hover_grace: HoverGraceMillis) -> Self {
        Self {
            visible,
            hover_grace,
        }
    }

    /// Builds timing from raw milliseconds, clamping both values.
    #[must_use]
    pub fn from_millis(visible: u32, hover_grace: u32) -> Self {
        Self::new(VisibleMillis::new(visible), HoverGraceMillis::new(hover_grace))
    }

    /// Fixed gap between a fade timer and its remove timer.
    #[must_use]
    pub fn remove_offset() -> Duration {
        Duration::from_millis(u64::from(REMOVE_DELAY_OFFSET_MILLIS))
    }
}
