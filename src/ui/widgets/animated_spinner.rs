// SPDX-License-Identifier: MPL-2.0
//! Animated loading spinner drawn on a Canvas.
//!
//! The caller owns the rotation angle and advances it on a timer tick, so a
//! grid full of placeholders shares one clock and spins in phase.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Fraction of a full turn covered by the arc.
const ARC_SWEEP: f32 = 1.5 * PI;
/// Line segments used to approximate the arc.
const ARC_SEGMENTS: u32 = 24;
const STROKE_WIDTH: f32 = 3.0;

pub struct AnimatedSpinner {
    cache: Cache,
    /// Rotation angle in radians.
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color, rotation angle, and diameter.
    #[must_use]
    pub fn new(color: Color, rotation: f32, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size,
        }
    }

    /// Wraps the spinner into a fixed-size Canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Faint full track behind the moving arc.
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // The arc starts at the top and sweeps three quarters of the
                // circle; rotation is applied by shifting the start angle.
                let start = self.rotation - PI / 2.0;

                let mut arc = canvas::path::Builder::new();
                arc.move_to(point_on_circle(center, radius, start));

                #[allow(clippy::cast_precision_loss)] // segment count is tiny
                for segment in 1..=ARC_SEGMENTS {
                    let t = segment as f32 / ARC_SEGMENTS as f32;
                    arc.line_to(point_on_circle(center, radius, start + ARC_SWEEP * t));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
