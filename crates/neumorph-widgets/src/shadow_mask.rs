//! Inner shadow drawn over the well rim, on top of the knob.

use crate::geometry::sanitize_side;
use crate::visuals::mask_gradient;
use neumorph_core::{Color, DrawCommand, Paint, Point, StrokeStyle};

/// Stroke width relative to size.
pub const STROKE_FRACTION: f32 = 0.1;
/// Blur radius relative to size.
pub const BLUR_FRACTION: f32 = 0.015;
/// Downward offset relative to size.
pub const DROP_FRACTION: f32 = 0.01;

/// A blurred gradient ring clipped to the well, darkening the top edge while
/// ON and the bottom edge while OFF.
#[derive(Debug, Clone, PartialEq)]
pub struct InnerShadowMask {
    colors: Vec<Color>,
    size: f32,
}

impl InnerShadowMask {
    /// Mask for a resting state.
    #[must_use]
    pub fn new(on: bool, size: f32) -> Self {
        Self::with_colors(mask_gradient(on), size)
    }

    /// Mask with an explicit top-to-bottom gradient.
    #[must_use]
    pub fn with_colors(colors: Vec<Color>, size: f32) -> Self {
        Self {
            colors,
            size: sanitize_side(size),
        }
    }

    /// Draw commands in local coordinates.
    #[must_use]
    pub fn render(&self) -> DrawCommand {
        let size = self.size;
        let radius = size / 2.0;
        let center = Point::new(radius, radius);
        let paint = Paint::linear(Point::new(radius, 0.0), Point::new(radius, size), &self.colors);

        DrawCommand::stroked_circle(center, radius, StrokeStyle::new(paint, size * STROKE_FRACTION))
            .with_blur(size * BLUR_FRACTION)
            .translated(0.0, size * DROP_FRACTION)
            .masked_by(DrawCommand::filled_circle(center, radius, Color::BLACK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unwrap mask → translate → blur → stroked circle.
    fn unwrap(cmd: &DrawCommand) -> (f32, f32, f32, Paint) {
        let DrawCommand::Mask { child, .. } = cmd else {
            panic!("Expected Mask, got {cmd:?}");
        };
        let DrawCommand::Group { transform, children } = child.as_ref() else {
            panic!("Expected Group");
        };
        let DrawCommand::Blur { radius: blur, child } = &children[0] else {
            panic!("Expected Blur");
        };
        let DrawCommand::Circle { style, .. } = child.as_ref() else {
            panic!("Expected Circle");
        };
        let stroke = style.stroke.clone().unwrap();
        (transform.translation_y(), *blur, stroke.width, stroke.paint)
    }

    #[test]
    fn test_on_gradient_fades_downwards() {
        let (_, _, _, paint) = unwrap(&InnerShadowMask::new(true, 256.0).render());
        let stops = paint.stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color, Color::BLACK);
        assert_eq!(stops[1].color, Color::BLACK);
        assert_eq!(stops[1].offset, 0.5);
        assert!(stops[2].color.is_transparent());
        assert!(matches!(
            paint,
            Paint::Linear { start, end, .. } if start.y == 0.0 && end.y == 256.0
        ));
    }

    #[test]
    fn test_off_gradient_darkens_bottom() {
        let (_, _, _, paint) = unwrap(&InnerShadowMask::new(false, 256.0).render());
        let stops = paint.stops();
        assert_eq!(stops.len(), 2);
        assert!(stops[0].color.is_transparent());
        assert_eq!(stops[1].color, Color::BLACK);
    }

    #[test]
    fn test_effect_sizes() {
        let (dy, blur, width, _) = unwrap(&InnerShadowMask::new(true, 200.0).render());
        assert!((dy - 2.0).abs() < 1e-5);
        assert!((blur - 3.0).abs() < 1e-5);
        assert!((width - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_clipped_to_circle() {
        let rendered = InnerShadowMask::new(false, 80.0).render();
        let DrawCommand::Mask { mask, .. } = &rendered else {
            panic!("Expected Mask");
        };
        assert!(matches!(mask.as_ref(), DrawCommand::Circle { center, radius, .. }
            if *radius == 40.0 && *center == Point::new(40.0, 40.0)));
    }
}
