// SPDX-License-Identifier: MPL-2.0
//! Opacity transition of a toast.
//!
//! A toast eases in over [`FADE_IN_MILLIS`] when it appears or becomes visible
//! again, and eases out over [`FADE_OUT_MILLIS`] when its fade timer fires.
//! A transition that interrupts another starts from the current opacity.

use crate::config::{FADE_IN_MILLIS, FADE_OUT_MILLIS};
use std::time::Duration;

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Starts slow, ends fast. Used when leaving.
    EaseIn,
    /// Starts fast, ends slow. Used when entering.
    EaseOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// An opacity transition anchored on the scheduler clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    started_at: Duration,
    length: Duration,
    easing: Easing,
}

impl Fade {
    /// Transition towards fully opaque, starting at `now` from `current`.
    #[must_use]
    pub fn fade_in(now: Duration, current: f32) -> Self {
        Self {
            from: current,
            to: 1.0,
            started_at: now,
            length: Duration::from_millis(u64::from(FADE_IN_MILLIS)),
            easing: Easing::EaseOut,
        }
    }

    /// Transition towards fully transparent, starting at `now` from `current`.
    #[must_use]
    pub fn fade_out(now: Duration, current: f32) -> Self {
        Self {
            from: current,
            to: 0.0,
            started_at: now,
            length: Duration::from_millis(u64::from(FADE_OUT_MILLIS)),
            easing: Easing::EaseIn,
        }
    }

    /// Opacity at scheduler time `now`.
    #[must_use]
    pub fn opacity(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started_at);
        if self.length.is_zero() || elapsed >= self.length {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.length.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    /// Returns whether the transition has reached its target at `now`.
    #[must_use]
    pub fn is_settled(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::EaseIn, Easing::EaseOut] {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = F32_EPSILON);
        }
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn easing_clamps_progress() {
        assert_abs_diff_eq!(Easing::EaseIn.apply(-1.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(Easing::EaseOut.apply(2.0), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fade_in_reaches_opaque_after_its_length() {
        let fade = Fade::fade_in(ms(1000), 0.0);
        assert_abs_diff_eq!(fade.opacity(ms(1000)), 0.0, epsilon = F32_EPSILON);
        assert!(fade.opacity(ms(1025)) > 0.5);
        assert_abs_diff_eq!(
            fade.opacity(ms(1000 + u64::from(FADE_IN_MILLIS))),
            1.0,
            epsilon = F32_EPSILON
        );
        assert!(fade.is_settled(ms(1000 + u64::from(FADE_IN_MILLIS))));
    }

    #[test]
    fn fade_out_reaches_transparent_after_its_length() {
        let fade = Fade::fade_out(ms(0), 1.0);
        assert!(fade.opacity(ms(500)) > 0.5);
        assert!(!fade.is_settled(ms(999)));
        assert_abs_diff_eq!(fade.opacity(ms(1000)), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(fade.opacity(ms(5000)), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn interrupted_transition_starts_from_current_opacity() {
        let out = Fade::fade_out(ms(0), 1.0);
        let halfway = out.opacity(ms(500));
        let back_in = Fade::fade_in(ms(500), halfway);
        assert_abs_diff_eq!(back_in.opacity(ms(500)), halfway, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(back_in.opacity(ms(600)), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn opacity_before_start_is_the_starting_value() {
        let fade = Fade::fade_out(ms(100), 0.8);
        assert_abs_diff_eq!(fade.opacity(ms(50)), 0.8, epsilon = F32_EPSILON);
    }
}
