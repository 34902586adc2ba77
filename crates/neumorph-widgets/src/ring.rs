//! Outer housing of the toggle.

use crate::geometry::sanitize_side;
use neumorph_core::{BoxStyle, Color, DrawCommand, Paint, Point, Shadow, StrokeStyle};

/// Side length at which the highlight is exactly one pixel wide.
pub const REFERENCE_SIDE: f32 = 320.0;

/// The filled circular housing behind everything else.
///
/// Independent of the toggle state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterRing {
    size: f32,
}

impl OuterRing {
    /// A ring of the given diameter.
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self {
            size: sanitize_side(size),
        }
    }

    /// Ring diameter.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Highlight width and offset.
    #[must_use]
    pub fn hairline(&self) -> f32 {
        self.size / REFERENCE_SIDE
    }

    /// Draw commands in local coordinates (top-left of the ring at origin).
    #[must_use]
    pub fn render(&self) -> DrawCommand {
        let size = self.size;
        let radius = size / 2.0;
        let center = Point::new(radius, radius);
        let hairline = self.hairline();

        let fill = Paint::linear(
            Point::new(radius, 0.0),
            Point::new(radius, size),
            &[Color::white(0.27), Color::white(0.13)],
        );
        let body = DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::fill(fill).with_shadow(Shadow::drop(
                Color::BLACK.opacity(0.8),
                size * 0.011,
                hairline,
            )),
        };

        let highlight_stroke = StrokeStyle::new(Color::WHITE.opacity(0.2), hairline);
        let highlight = DrawCommand::stroked_circle(center, radius, highlight_stroke)
            .translated(0.0, hairline)
            .masked_by(DrawCommand::filled_circle(center, radius, Color::BLACK));

        DrawCommand::group(vec![body, highlight])
    }
}
