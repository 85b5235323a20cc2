// SPDX-License-Identifier: MPL-2.0
//! Selection badge styles for grid cells.
//!
//! Every cell shows a small circle in its top-right corner: a translucent
//! ring while unselected, a filled brand-colored disc with the selection
//! number once picked.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Empty ring on an unselected cell.
#[must_use]
pub fn ring(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE_RING,
            ..palette::WHITE
        })),
        border: Border {
            color: palette::WHITE,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..container::Style::default()
    }
}

/// Filled disc carrying the selection number.
#[must_use]
pub fn numbered(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::WHITE,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..container::Style::default()
    }
}

/// Subtle darkening laid over a cell so the ring stays visible on bright
/// thumbnails.
#[must_use]
pub fn cell_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_badge_is_filled_with_brand_color() {
        let style = numbered(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn ring_badge_is_translucent() {
        let style = ring(&Theme::Dark);
        if let Some(Background::Color(color)) = style.background {
            assert!(color.a < 1.0);
        } else {
            panic!("Expected background color");
        }
    }
}
