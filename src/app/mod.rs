// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a toast stack.
//!
//! The `App` owns the toasts and the timer queue they schedule on. A tick
//! subscription advances the queue to the wall-clock time elapsed since
//! startup, and every expiry that falls due is fed back to the stack. Pointer
//! messages first bring the clock up to date so that timers re-armed on leave
//! are measured from the moment the pointer actually left.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::timer::{Scheduler, TimerQueue};
use crate::toast::{self, Expiry, Level, Outcome, Placement, ToastContent, ToastStack, ToastTiming};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use subscription::TickRate;

/// Root Iced application state.
pub struct App {
    toasts: ToastStack,
    timers: TimerQueue<Expiry>,
    /// Wall-clock instant matching time zero of `timers`.
    origin: Instant,
    placement: Placement,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("pending_timers", &self.timers.pending_count())
            .field("placement", &self.placement)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            toasts: ToastStack::default(),
            timers: TimerQueue::new(),
            origin: Instant::now(),
            placement: Placement::default(),
        }
    }
}

/// Merges command-line overrides into the configured timing.
fn resolve_timing(config: &config::ToastConfig, flags: &Flags) -> ToastTiming {
    let configured = config.timing();
    ToastTiming::from_millis(
        flags.visible_ms.unwrap_or(configured.visible.value()),
        flags.grace_ms.unwrap_or(configured.hover_grace.value()),
    )
}

/// Merges the command-line placement into the configured one.
///
/// An unparsable value is logged and ignored.
fn resolve_placement(configured: Placement, raw: Option<&str>) -> Placement {
    match raw {
        Some(raw) => Placement::parse(raw).unwrap_or_else(|| {
            tracing::warn!(placement = raw, "unknown placement, keeping configured one");
            configured
        }),
        None => configured,
    }
}

fn sample_message(level: Level) -> &'static str {
    match level {
        Level::Info => "A new version is available.",
        Level::Success => "Settings saved.",
        Level::Warning => "Disk space is running low.",
        Level::Error => "Could not reach the server.",
    }
}

impl App {
    /// Initializes application state from `Flags` and the persisted config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));

        let timing = resolve_timing(&config.toast, &flags);
        let placement = resolve_placement(config.toast.placement, flags.placement.as_deref());
        tracing::info!(
            visible_ms = timing.visible.value(),
            grace_ms = timing.hover_grace.value(),
            ?placement,
            "starting"
        );

        let mut app = App {
            toasts: ToastStack::new(timing),
            placement,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.toasts
                .push(ToastContent::warning(warning), &mut app.timers);
        }
        if let Some(message) = flags.message {
            app.toasts.push(ToastContent::info(message), &mut app.timers);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => "Iced Toast".to_string(),
            count => format!("Iced Toast ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.tick_rate())
    }

    /// How often the clock needs to tick, if at all.
    fn tick_rate(&self) -> Option<TickRate> {
        if self.toasts.is_empty() {
            None
        } else if self.toasts.is_animating(self.timers.now()) {
            Some(TickRate::Frame)
        } else {
            Some(TickRate::Timer)
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(at) => self.advance_clock(at),
            Message::Show(level) => {
                self.advance_clock(Instant::now());
                let id = self
                    .toasts
                    .push(ToastContent::new(level, sample_message(level)), &mut self.timers);
                tracing::debug!(toast = %id, level = level.label(), "toast shown");
            }
            Message::Toast(message) => {
                self.advance_clock(Instant::now());
                let id = message.toast();
                if self.toasts.update(message, &mut self.timers) == Outcome::Detached {
                    tracing::debug!(toast = %id, "toast detached");
                }
            }
            Message::ClearAll => {
                self.advance_clock(Instant::now());
                self.toasts.clear(&mut self.timers);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            timing: self.toasts.timing(),
            placement: self.placement,
            now: self.timers.now(),
        })
    }

    /// Brings the timer queue up to `at` and delivers every expiry now due.
    fn advance_clock(&mut self, at: Instant) {
        self.timers
            .advance_to(at.saturating_duration_since(self.origin));
        while let Some(fired) = self.timers.pop_due() {
            self.toasts
                .update(toast::Message::Expired(fired), &mut self.timers);
        }
    }
}
