// SPDX-License-Identifier: MPL-2.0
//! Shared user interface infrastructure.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
