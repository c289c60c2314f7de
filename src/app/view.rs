// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: a panel of buttons with the toast stack layered on top.

use super::Message;
use crate::toast::{self, Level, Placement, ToastStack, ToastTiming};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// Contextual data needed to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a ToastStack,
    pub timing: ToastTiming,
    pub placement: Placement,
    pub now: Duration,
}

const LEVELS: [Level; 4] = [Level::Info, Level::Success, Level::Warning, Level::Error];

/// Renders the entire application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("Toasts").size(typography::TITLE_MD);

    let hint = Text::new(format!(
        "Toasts fade after {} ms. Hover one to hold it; it fades {} ms after you leave.",
        ctx.timing.visible.value(),
        ctx.timing.hover_grace.value(),
    ))
    .size(typography::BODY);

    let buttons = LEVELS.iter().fold(Row::new().spacing(spacing::XS), |row, level| {
        row.push(
            button(Text::new(level.label()).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::Show(*level)),
        )
    });

    let clear = button(Text::new("Clear").size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe((!ctx.toasts.is_empty()).then_some(Message::ClearAll));

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(hint)
        .push(buttons.push(clear));

    let content = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top);

    let overlay = toast::view::stack(ctx.toasts, ctx.placement, ctx.now).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(overlay)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerQueue;
    use crate::toast::ToastContent;

    #[test]
    fn view_renders_with_and_without_toasts() {
        let mut queue = TimerQueue::new();
        let mut toasts = ToastStack::default();

        let _ = view(ViewContext {
            toasts: &toasts,
            timing: ToastTiming::default(),
            placement: Placement::default(),
            now: Duration::ZERO,
        });

        toasts.push(ToastContent::warning("disk almost full"), &mut queue);
        let _ = view(ViewContext {
            toasts: &toasts,
            timing: ToastTiming::default(),
            placement: Placement::default(),
            now: Duration::from_millis(10),
        });
    }
}
