// SPDX-License-Identifier: MPL-2.0
//! Shared user-interface infrastructure.
//!
//! Follows a component-based architecture with the Elm-style "state down,
//! messages up" pattern. The picker itself lives in [`crate::picker`]; this
//! module holds the pieces it shares with the demo host:
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers, badges)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons
//! - [`widgets`] - Custom Iced widgets (animated spinner)

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod widgets;
