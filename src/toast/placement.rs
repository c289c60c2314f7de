// SPDX-License-Identifier: MPL-2.0
//! Where the toast container sits in the window.

use iced::alignment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Horizontal {
    Start,
    Center,
    #[default]
    End,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Vertical {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Corner or edge the toasts stack against. Defaults to bottom end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Placement {
    #[serde(default)]
    pub horizontal: Horizontal,
    #[serde(default)]
    pub vertical: Vertical,
}

impl Placement {
    #[must_use]
    pub fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub fn align_x(self) -> alignment::Horizontal {
        match self.horizontal {
            Horizontal::Start => alignment::Horizontal::Left,
            Horizontal::Center => alignment::Horizontal::Center,
            Horizontal::End => alignment::Horizontal::Right,
        }
    }

    #[must_use]
    pub fn align_y(self) -> alignment::Vertical {
        match self.vertical {
            Vertical::Top => alignment::Vertical::Top,
            Vertical::Middle => alignment::Vertical::Center,
            Vertical::Bottom => alignment::Vertical::Bottom,
        }
    }

    /// Parses `"<horizontal>-<vertical>"`, e.g. `"start-top"` or `"end-bottom"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_lowercase();
        let (h, v) = lower.split_once('-')?;
        let horizontal = match h {
            "start" => Horizontal::Start,
            "center" => Horizontal::Center,
            "end" => Horizontal::End,
            _ => return None,
        };
        let vertical = match v {
            "top" => Vertical::Top,
            "middle" => Vertical::Middle,
            "bottom" => Vertical::Bottom,
            _ => return None,
        };
        Some(Self::new(horizontal, vertical))
    }
}
