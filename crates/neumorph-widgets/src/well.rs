//! The recessed circle the knob sits in.

use crate::geometry::sanitize_side;
use crate::visuals::well_top_color;
use neumorph_core::{BoxStyle, Color, DrawCommand, GradientStop, Paint, Point, Shadow};

/// End radius of the well gradient relative to the diameter.
const GRADIENT_REACH: f32 = 1.7;
/// Shadow blur and drop relative to the diameter.
const SHADOW_FRACTION: f32 = 0.047;

/// Circular recess lit from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerWell {
    top: Color,
    diameter: f32,
}

impl InnerWell {
    /// Well for a resting state.
    #[must_use]
    pub fn new(on: bool, diameter: f32) -> Self {
        Self::with_top_color(well_top_color(on), diameter)
    }

    /// Well whose gradient starts at `top`.
    #[must_use]
    pub fn with_top_color(top: Color, diameter: f32) -> Self {
        Self {
            top,
            diameter: sanitize_side(diameter),
        }
    }

    /// Draw commands in local coordinates.
    #[must_use]
    pub fn render(&self) -> DrawCommand {
        let d = self.diameter;
        let radius = d / 2.0;
        let fill = Paint::radial(
            Point::new(radius, 0.0),
            0.0,
            d * GRADIENT_REACH,
            GradientStop::evenly_spaced(&[self.top, Color::BLACK, Color::BLACK]),
        );

        DrawCommand::Circle {
            center: Point::new(radius, radius),
            radius,
            style: BoxStyle::fill(fill).with_shadow(Shadow::drop(
                Color::BLACK.opacity(0.5),
                d * SHADOW_FRACTION,
                d * SHADOW_FRACTION,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_of(cmd: &DrawCommand) -> (Paint, Shadow) {
        match cmd {
            DrawCommand::Circle { style, .. } => {
                (style.fill.clone().unwrap(), style.shadow.unwrap())
            }
            other => panic!("Expected Circle, got {other:?}"),
        }
    }

    #[test]
    fn test_on_gradient_is_all_black() {
        let (fill, _) = fill_of(&InnerWell::new(true, 256.0).render());
        assert!(fill.stops().iter().all(|s| s.color == Color::BLACK));
    }

    #[test]
    fn test_off_gradient_starts_translucent_white() {
        let (fill, _) = fill_of(&InnerWell::new(false, 160.0).render());
        let first = fill.first_color().unwrap();
        assert_eq!((first.r, first.g, first.b), (1.0, 1.0, 1.0));
        assert!((first.a - 0.25).abs() < 1e-6);
        assert_eq!(fill.stops()[1].color, Color::BLACK);
    }

    #[test]
    fn test_gradient_anchor_and_reach() {
        let (fill, _) = fill_of(&InnerWell::new(false, 100.0).render());
        match fill {
            Paint::Radial {
                center,
                start_radius,
                end_radius,
                ..
            } => {
                assert_eq!(center, Point::new(50.0, 0.0));
                assert_eq!(start_radius, 0.0);
                assert!((end_radius - 170.0).abs() < 1e-4);
            }
            other => panic!("Expected Radial, got {other:?}"),
        }
    }

    #[test]
    fn test_shadow_scales_with_diameter() {
        let (_, shadow) = fill_of(&InnerWell::new(true, 1000.0).render());
        assert!((shadow.blur - 47.0).abs() < 1e-3);
        assert!((shadow.offset_y - 47.0).abs() < 1e-3);
        assert!((shadow.color.a - 0.5).abs() < 1e-6);
    }
}
