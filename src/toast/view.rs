// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Each toast is a small card with a level-colored border and a dismiss
//! button. The card is wrapped in a `mouse_area` whose enter and exit events
//! become [`Message::PointerEntered`] and [`Message::PointerLeft`], which is
//! how the hover hold reaches the timer lifecycle. Every color is scaled by
//! the toast's current opacity so the fade plays out on screen.

use super::placement::Placement;
use super::stack::{Message, ToastStack};
use super::state::ToastState;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Duration;

/// Renders a single toast at scheduler time `now`.
pub fn toast(state: &ToastState, now: Duration) -> Element<'_, Message> {
    let id = state.id();
    let accent = state.content().level().color();
    let alpha = state.opacity(now);

    let message = Text::new(state.content().message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha)),
        });

    let dismiss = button(
        Text::new("\u{2715}")
            .size(typography::CAPTION)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            }),
    )
    .on_press(Message::Dismiss(id))
    .padding(spacing::XXS)
    .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

    mouse_area(card)
        .on_enter(Message::PointerEntered(id))
        .on_exit(Message::PointerLeft(id))
        .into()
}

/// Renders every toast of the stack, aligned according to `placement`.
pub fn stack(stack: &ToastStack, placement: Placement, now: Duration) -> Element<'_, Message> {
    if stack.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toasts = Column::with_children(stack.iter().map(|state| toast(state, now)))
        .spacing(spacing::XS)
        .align_x(placement.align_x());

    Container::new(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(placement.align_x())
        .align_y(placement.align_y())
        .padding(spacing::MD)
        .into()
}

/// Scales a color's alpha by `factor`.
fn with_alpha(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: with_alpha(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::MD.color, opacity::SHADOW * alpha),
            ..shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = with_alpha(theme.extended_palette().background.base.text, alpha);
    let hover_background = |strength: f32| {
        Some(iced::Background::Color(Color {
            a: strength * alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
