// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::AppTheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Rounded popup card holding the picker grid.
pub fn card(app_theme: &AppTheme) -> impl Fn(&Theme) -> container::Style {
    let colors = app_theme.colors.clone();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..container::Style::default()
    }
}

/// Dimmed, full-window backdrop behind the popup.
pub fn backdrop(app_theme: &AppTheme) -> impl Fn(&Theme) -> container::Style {
    let background = app_theme.colors.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

/// Neutral placeholder behind a grid cell while its thumbnail loads.
pub fn cell_placeholder(theme: &Theme) -> container::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
