// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{self, Level};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Push a sample toast of the given level.
    Show(Level),
    /// Forwarded toast message (pointer, dismiss).
    Toast(toast::Message),
    /// Tear down every toast on screen.
    ClearAll,
    Tick(Instant), // Periodic tick driving timers and fades
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Overrides `[toast] visible_millis`.
    pub visible_ms: Option<u32>,
    /// Overrides `[toast] hover_grace_millis`.
    pub grace_ms: Option<u32>,
    /// Overrides the toast placement, e.g. `start-top`.
    pub placement: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional message shown as a toast on startup.
    pub message: Option<String>,
}
