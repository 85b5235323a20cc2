// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Every color, spacing step, and size the widgets use comes from here so the
//! popup and the demo host stay visually coherent. The spacing scale sits on
//! an 8px baseline grid; sizes are logical pixels.

use iced::{Color, Shadow, Vector};

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Ring fill on unselected badges.
    pub const BADGE_RING: f32 = 0.25;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Diameter of the selection badge in a grid cell.
    pub const BADGE: f32 = 20.0;
    /// Height of thumbnails in the demo's picked strip.
    pub const PICKED_STRIP: f32 = 120.0;
}

pub mod typography {
    pub const CAPTION: f32 = 11.0;
    pub const BODY_SM: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const TITLE_SM: f32 = 17.0;
    pub const TITLE_MD: f32 = 20.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 20.0;
    /// Large enough to round any badge-sized box into a circle.
    pub const FULL: f32 = 1_000.0;
}

pub mod shadow {
    use super::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.4,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 6.0),
        blur_radius: 24.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_its_ratios() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn badge_radius_rounds_badge_into_circle() {
        assert!(radius::FULL >= sizing::BADGE);
    }

    #[test]
    fn opacity_values_stay_normalized() {
        for value in [
            opacity::TRANSPARENT,
            opacity::BADGE_RING,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
            opacity::OPAQUE,
        ] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
